pub mod timeline;

pub use timeline::{NewTimeline, TimelineRecord};
