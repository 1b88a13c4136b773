pub mod algorithm;
pub mod category;
pub mod model;
pub mod time_of_day;

pub use algorithm::{category_at, compute_schedule_segments, fallback_segments};
pub use category::Category;
pub use model::{Segment, TimelineSchedule, MINUTES_PER_48_HOURS};
pub use time_of_day::{parse_time_of_day, MinuteOfDay, MINUTES_PER_DAY};
