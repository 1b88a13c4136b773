use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

pub const MINUTES_PER_DAY: u16 = 1440;

/// A minute of the day in `[0, 1440)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    pub const MIDNIGHT: MinuteOfDay = MinuteOfDay(0);

    pub fn new(minute: u16) -> Result<Self, ScheduleError> {
        if minute >= MINUTES_PER_DAY {
            return Err(ScheduleError::invalid(
                minute.to_string(),
                "minute of day must be below 1440",
            ));
        }
        Ok(Self(minute))
    }

    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, ScheduleError> {
        if hour > 23 {
            return Err(ScheduleError::invalid(
                format!("{hour}:{minute:02}"),
                "hour must be between 0 and 23",
            ));
        }
        if minute > 59 {
            return Err(ScheduleError::invalid(
                format!("{hour}:{minute:02}"),
                "minute must be between 0 and 59",
            ));
        }
        Ok(Self((hour * 60 + minute) as u16))
    }

    /// Fold any minute count onto the 24-hour clock.
    pub fn wrapping(total_minutes: u32) -> Self {
        Self((total_minutes % u32::from(MINUTES_PER_DAY)) as u16)
    }

    pub fn get(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl TryFrom<u16> for MinuteOfDay {
    type Error = ScheduleError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        MinuteOfDay::new(value)
    }
}

impl From<MinuteOfDay> for u16 {
    fn from(value: MinuteOfDay) -> Self {
        value.0
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse a persisted `HH:MM` (or `H:MM`) schedule field into minutes since midnight.
///
/// `"07:00"` becomes 420. Anything that is not two short digit groups around a
/// colon, or that falls outside a 24-hour clock, is an `InvalidScheduleTime`.
pub fn parse_time_of_day(text: &str) -> Result<MinuteOfDay, ScheduleError> {
    let trimmed = text.trim();
    let (hours, minutes) = trimmed
        .split_once(':')
        .ok_or_else(|| ScheduleError::invalid(text, "expected HH:MM"))?;

    let hour = parse_component(text, hours)?;
    let minute = parse_component(text, minutes)?;

    MinuteOfDay::from_hm(hour, minute).map_err(|err| match err {
        ScheduleError::InvalidScheduleTime { reason, .. } => ScheduleError::invalid(text, reason),
    })
}

fn parse_component(input: &str, part: &str) -> Result<u32, ScheduleError> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScheduleError::invalid(input, "expected HH:MM"));
    }
    part.parse::<u32>()
        .map_err(|_| ScheduleError::invalid(input, "expected HH:MM"))
}
