pub mod format;
pub mod source;

pub use format::{format_clock, format_date, format_offset};
pub use source::{
    current_minute_of_day, is_known_timezone, parse_timezone, utc_offset_minutes, zoned_time,
    ClockSource, FixedClock, SystemClock, ZonedTime,
};
