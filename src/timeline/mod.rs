pub mod commands;
pub mod controller;
pub mod labels;
pub mod state;
pub mod view;

pub use controller::TimelineController;
pub use labels::{hour_labels, HourLabel};
pub use state::{LegendEntry, TimelineFrame, TimelineView};
pub use view::{build_frame, build_row};
