use chrono::{DateTime, Local, NaiveDateTime, Offset, Timelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::ClockError;
use crate::schedule::MinuteOfDay;

const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// Where "now" comes from. Everything downstream is a function of this instant.
pub trait ClockSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant, for replaying a moment or for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl ClockSource for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Wall-clock reading in one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonedTime {
    pub local: NaiveDateTime,
    pub utc_offset_minutes: i32,
    /// Set when the zone was unknown and system local time was used instead.
    pub fallback: bool,
}

impl ZonedTime {
    pub fn minute_of_day(&self) -> MinuteOfDay {
        MinuteOfDay::wrapping(self.local.hour() * 60 + self.local.minute())
    }
}

pub fn parse_timezone(id: &str) -> Result<Tz, ClockError> {
    id.trim()
        .parse::<Tz>()
        .map_err(|_| ClockError::UnknownTimezone(id.to_string()))
}

pub fn is_known_timezone(id: &str) -> bool {
    parse_timezone(id).is_ok()
}

/// Resolve `instant` in `timezone`. Never fails: an unknown identifier falls
/// back to the system's local zone so one bad row cannot stall the others.
pub fn zoned_time(instant: DateTime<Utc>, timezone: &str) -> ZonedTime {
    match parse_timezone(timezone) {
        Ok(tz) => {
            let local = instant.with_timezone(&tz);
            ZonedTime {
                local: local.naive_local(),
                utc_offset_minutes: local.offset().fix().local_minus_utc() / 60,
                fallback: false,
            }
        }
        Err(err) => {
            log_debug!("{err}; falling back to system local time");
            let local = instant.with_timezone(&Local);
            ZonedTime {
                local: local.naive_local(),
                utc_offset_minutes: local.offset().local_minus_utc() / 60,
                fallback: true,
            }
        }
    }
}

pub fn current_minute_of_day(clock: &dyn ClockSource, timezone: &str) -> MinuteOfDay {
    zoned_time(clock.now(), timezone).minute_of_day()
}

pub fn utc_offset_minutes(instant: DateTime<Utc>, timezone: &str) -> i32 {
    zoned_time(instant, timezone).utc_offset_minutes
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 0, 30, 0).single().unwrap())
    }

    #[test]
    fn resolves_known_zones() {
        let clock = clock();
        // Sydney is on daylight time (UTC+11) in January
        assert_eq!(current_minute_of_day(&clock, "Australia/Sydney").get(), 11 * 60 + 30);
        assert_eq!(current_minute_of_day(&clock, "America/Chicago").get(), 18 * 60 + 30);
        assert_eq!(current_minute_of_day(&clock, "Asia/Kolkata").get(), 6 * 60);
        assert_eq!(current_minute_of_day(&clock, "UTC").get(), 30);

        assert_eq!(utc_offset_minutes(clock.now(), "Australia/Sydney"), 660);
        assert_eq!(utc_offset_minutes(clock.now(), "America/St_Johns"), -210);
    }

    #[test]
    fn unknown_zone_falls_back_without_failing() {
        let time = zoned_time(clock().now(), "Mars/Olympus_Mons");
        assert!(time.fallback);
        assert!(time.minute_of_day().get() < 1440);

        let minute = current_minute_of_day(&clock(), "");
        assert!(minute.get() < 1440);
    }

    #[test]
    fn validates_identifiers() {
        assert!(is_known_timezone("Europe/London"));
        assert!(is_known_timezone(" Asia/Tokyo "));
        assert!(!is_known_timezone("Europe/Atlantis"));
        assert_eq!(
            parse_timezone("nowhere").unwrap_err(),
            ClockError::UnknownTimezone("nowhere".into())
        );
    }
}
