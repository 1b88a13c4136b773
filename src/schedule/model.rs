use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::TimelineRecord;

use super::category::Category;
use super::time_of_day::{parse_time_of_day, MinuteOfDay};

/// Width of the rendered window: two consecutive days.
pub const MINUTES_PER_48_HOURS: u16 = 2880;

/// One timeline's recurring daily schedule, already validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSchedule {
    pub wake: MinuteOfDay,
    pub sleep: MinuteOfDay,
    pub work_start: MinuteOfDay,
    pub work_end: MinuteOfDay,
}

impl TimelineSchedule {
    pub fn new(
        wake: MinuteOfDay,
        sleep: MinuteOfDay,
        work_start: MinuteOfDay,
        work_end: MinuteOfDay,
    ) -> Self {
        Self {
            wake,
            sleep,
            work_start,
            work_end,
        }
    }

    /// Build from raw minutes, rejecting anything outside `[0, 1440)`.
    pub fn from_minutes(
        wake: u16,
        sleep: u16,
        work_start: u16,
        work_end: u16,
    ) -> Result<Self, ScheduleError> {
        Ok(Self::new(
            MinuteOfDay::new(wake)?,
            MinuteOfDay::new(sleep)?,
            MinuteOfDay::new(work_start)?,
            MinuteOfDay::new(work_end)?,
        ))
    }

    /// Derive the schedule from a persisted record's `HH:MM` fields.
    pub fn from_record(record: &TimelineRecord) -> Result<Self, ScheduleError> {
        Ok(Self::new(
            parse_time_of_day(&record.wake_time)?,
            parse_time_of_day(&record.sleep_time)?,
            parse_time_of_day(&record.work_start)?,
            parse_time_of_day(&record.work_end)?,
        ))
    }

    pub fn sleep_crosses_midnight(&self) -> bool {
        self.sleep < self.wake
    }

    pub fn work_crosses_midnight(&self) -> bool {
        self.work_end < self.work_start
    }
}

/// A maximal run of one category inside `[0, 2880)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start: u16,
    pub end: u16,
    pub category: Category,
}

impl Segment {
    pub fn duration_minutes(&self) -> u16 {
        self.end - self.start
    }

    pub fn contains(&self, minute: u16) -> bool {
        self.start <= minute && minute < self.end
    }

    pub fn left_percent(&self) -> f64 {
        f64::from(self.start) / f64::from(MINUTES_PER_48_HOURS) * 100.0
    }

    pub fn width_percent(&self) -> f64 {
        f64::from(self.duration_minutes()) / f64::from(MINUTES_PER_48_HOURS) * 100.0
    }
}
