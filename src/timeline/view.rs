use chrono::{DateTime, Utc};

use crate::clock::{format_clock, format_date, format_offset, zoned_time};
use crate::models::TimelineRecord;
use crate::schedule::{
    category_at, compute_schedule_segments, fallback_segments, Category, TimelineSchedule,
};
use crate::settings::AppConfig;
use crate::sync::sync_state;

use super::labels::hour_labels;
use super::state::{LegendEntry, TimelineFrame, TimelineView};

/// Compute every row for `instant`. Rows are independent: a bad schedule or an
/// unknown zone degrades that row only.
pub fn build_frame(config: &AppConfig, instant: DateTime<Utc>, tick: u64) -> TimelineFrame {
    let rows = config
        .timelines
        .iter()
        .map(|record| build_row(record, instant, config.sync_mode, config.use_24_hour))
        .collect();

    TimelineFrame {
        tick,
        generated_at: instant,
        sync_mode: config.sync_mode,
        use_24_hour: config.use_24_hour,
        compact_mode: config.compact_mode,
        rows,
        legend: legend(),
    }
}

pub fn build_row(
    record: &TimelineRecord,
    instant: DateTime<Utc>,
    sync_mode: bool,
    use_24_hour: bool,
) -> TimelineView {
    let time = zoned_time(instant, &record.timezone);
    let minute_of_day = time.minute_of_day();

    let (segments, schedule_error) = match TimelineSchedule::from_record(record) {
        Ok(schedule) => (compute_schedule_segments(&schedule), None),
        Err(err) => (fallback_segments(), Some(err.to_string())),
    };
    let current_category = category_at(&segments, minute_of_day.get()).unwrap_or_default();

    TimelineView {
        id: record.id.clone(),
        name: record.name.clone(),
        timezone: record.timezone.clone(),
        offset_label: format_offset(time.utc_offset_minutes),
        clock_text: format_clock(&time, use_24_hour),
        date_text: format_date(&time),
        segments,
        current_category,
        sync: sync_state(&record.id, minute_of_day, sync_mode, time.fallback),
        hour_labels: hour_labels(use_24_hour),
        schedule_error,
    }
}

fn legend() -> Vec<LegendEntry> {
    Category::ALL
        .iter()
        .map(|category| LegendEntry {
            category: *category,
            label: category.legend_label(),
        })
        .collect()
}
