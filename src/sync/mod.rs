//! Aligns each timeline's "now" onto a shared sync line.
//!
//! Every bar spans 48 hours starting at its own local midnight, so the current
//! moment always sits in the first half. In sync mode each bar is shifted so
//! that its current moment lands on [`SYNC_LINE_POSITION`] of the visible
//! 24-hour viewport, whatever the local hour.

use serde::Serialize;

use crate::clock::{zoned_time, ClockSource};
use crate::models::TimelineRecord;
use crate::schedule::{MinuteOfDay, MINUTES_PER_48_HOURS};

/// Where the sync line sits, as a fraction of the visible 24-hour width.
pub const SYNC_LINE_POSITION: f64 = 1.0 / 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncTransform {
    /// Indicator offset inside its own (untranslated) bar.
    pub indicator_percent: f64,
    /// Horizontal translation applied to the bar and its hour labels.
    pub shift_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSyncState {
    pub timeline_id: String,
    pub minute_of_day: MinuteOfDay,
    pub position_in_48h: f64,
    pub indicator_percent: f64,
    pub shift_percent: f64,
    pub clock_fallback: bool,
}

pub fn position_in_48h(minute_of_day: MinuteOfDay) -> f64 {
    f64::from(minute_of_day.get()) / f64::from(MINUTES_PER_48_HOURS)
}

pub fn compute_sync_transform(minute_of_day: MinuteOfDay, sync_mode: bool) -> SyncTransform {
    let current = position_in_48h(minute_of_day);
    let shift_percent = if sync_mode {
        // the 48h bar is twice the viewport width, hence the halved target
        let target = SYNC_LINE_POSITION * 0.5;
        -((current - target) * 100.0)
    } else {
        0.0
    };

    SyncTransform {
        indicator_percent: current * 100.0,
        shift_percent,
    }
}

/// Sync state for every timeline at one shared instant, in input order.
pub fn synchronize(
    timelines: &[TimelineRecord],
    sync_mode: bool,
    clock: &dyn ClockSource,
) -> Vec<TimelineSyncState> {
    let instant = clock.now();
    timelines
        .iter()
        .map(|timeline| {
            let time = zoned_time(instant, &timeline.timezone);
            sync_state(&timeline.id, time.minute_of_day(), sync_mode, time.fallback)
        })
        .collect()
}

pub(crate) fn sync_state(
    timeline_id: &str,
    minute_of_day: MinuteOfDay,
    sync_mode: bool,
    clock_fallback: bool,
) -> TimelineSyncState {
    let transform = compute_sync_transform(minute_of_day, sync_mode);
    TimelineSyncState {
        timeline_id: timeline_id.to_string(),
        minute_of_day,
        position_in_48h: position_in_48h(minute_of_day),
        indicator_percent: transform.indicator_percent,
        shift_percent: transform.shift_percent,
        clock_fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn minute(value: u16) -> MinuteOfDay {
        MinuteOfDay::new(value).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn midnight_in_sync_mode() {
        let transform = compute_sync_transform(MinuteOfDay::MIDNIGHT, true);
        assert_eq!(transform.indicator_percent, 0.0);
        let expected = -((0.0 / 2880.0) - (1.0 / 6.0 * 0.5)) * 100.0;
        assert!(close(transform.shift_percent, expected));
        assert!(close(transform.shift_percent, 100.0 / 12.0));
    }

    #[test]
    fn unsynced_never_shifts() {
        for value in [0, 1, 240, 720, 1439] {
            let transform = compute_sync_transform(minute(value), false);
            assert_eq!(transform.shift_percent, 0.0);
            assert!(close(
                transform.indicator_percent,
                f64::from(value) / 2880.0 * 100.0
            ));
        }
    }

    #[test]
    fn shifted_indicator_lands_on_sync_line() {
        // indicator + shift is where "now" ends up, as a share of the 48h bar
        for value in [0, 90, 600, 1200, 1439] {
            let transform = compute_sync_transform(minute(value), true);
            let landed = transform.indicator_percent + transform.shift_percent;
            assert!(close(landed, SYNC_LINE_POSITION * 0.5 * 100.0));
        }
    }

    #[test]
    fn indicator_ignores_sync_mode() {
        let synced = compute_sync_transform(minute(1000), true);
        let unsynced = compute_sync_transform(minute(1000), false);
        assert_eq!(synced.indicator_percent, unsynced.indicator_percent);
    }

    #[test]
    fn synchronizes_all_timelines_at_one_instant() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).single().unwrap());
        let timelines = vec![
            TimelineRecord::with_standard_hours("1", "You", "Australia/Sydney"),
            TimelineRecord::with_standard_hours("2", "Lost", "Not/AZone"),
            TimelineRecord::with_standard_hours("3", "Colleague", "America/Chicago"),
        ];

        let states = synchronize(&timelines, true, &clock);
        assert_eq!(states.len(), 3);
        assert_eq!(
            states.iter().map(|s| s.timeline_id.as_str()).collect::<Vec<_>>(),
            ["1", "2", "3"]
        );

        // Sydney winter UTC+10, Chicago summer UTC-5
        assert_eq!(states[0].minute_of_day.get(), 22 * 60);
        assert_eq!(states[2].minute_of_day.get(), 7 * 60);
        assert!(!states[0].clock_fallback);
        assert!(states[1].clock_fallback);
        assert!(states[1].minute_of_day.get() < 1440);

        for state in &states {
            assert!(close(state.indicator_percent, state.position_in_48h * 100.0));
            assert!(close(
                state.indicator_percent + state.shift_percent,
                SYNC_LINE_POSITION * 50.0
            ));
        }
    }
}
