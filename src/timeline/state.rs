use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::schedule::{Category, Segment};
use crate::sync::TimelineSyncState;

use super::labels::HourLabel;

/// Everything the presentation layer needs for one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineView {
    pub id: String,
    pub name: String,
    pub timezone: String,
    pub offset_label: String,
    pub clock_text: String,
    pub date_text: String,
    pub segments: Vec<Segment>,
    pub current_category: Category,
    pub sync: TimelineSyncState,
    pub hour_labels: Vec<HourLabel>,
    /// Why the row fell back to an all-sleep bar, if it did.
    pub schedule_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub category: Category,
    pub label: &'static str,
}

/// One tick's worth of rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineFrame {
    pub tick: u64,
    pub generated_at: DateTime<Utc>,
    pub sync_mode: bool,
    pub use_24_hour: bool,
    pub compact_mode: bool,
    pub rows: Vec<TimelineView>,
    pub legend: Vec<LegendEntry>,
}

impl TimelineFrame {
    pub fn row(&self, id: &str) -> Option<&TimelineView> {
        self.rows.iter().find(|row| row.id == id)
    }
}

impl fmt::Display for TimelineFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            write!(
                f,
                "{:<14} {:>11} {:<9} {:<11} {:<5} now {:>6.2}%",
                row.name,
                row.clock_text,
                row.offset_label,
                row.date_text,
                row.current_category.as_str(),
                row.sync.indicator_percent,
            )?;
            if self.sync_mode {
                write!(f, "  shift {:>7.2}%", row.sync.shift_percent)?;
            }
            if let Some(err) = &row.schedule_error {
                write!(f, "  ({err})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
