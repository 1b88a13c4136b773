use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tzline_lib::{
    clock::FixedClock,
    models::NewTimeline,
    schedule::{compute_schedule_segments, parse_time_of_day, Category, TimelineSchedule},
    sync::{compute_sync_transform, SYNC_LINE_POSITION},
    timeline::commands,
    AppState,
};

fn app_state() -> (AppState, std::path::PathBuf) {
    let path = std::env::temp_dir().join(format!("tzline-it-{}.json", uuid::Uuid::new_v4()));
    // 08:30 in Tokyo, 00:30 in London, 19:30 the previous day in New York
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 2, 10, 23, 30, 0).single().unwrap());
    let state = AppState::new(path.clone(), Arc::new(clock)).unwrap();
    (state, path)
}

fn tokyo() -> NewTimeline {
    NewTimeline {
        name: "Tokyo".into(),
        timezone: "Asia/Tokyo".into(),
        wake_time: "08:00".into(),
        sleep_time: "00:30".into(),
        work_start: "09:30".into(),
        work_end: "18:30".into(),
    }
}

#[test]
fn adding_a_timeline_shows_up_in_the_next_frame() {
    let (state, path) = app_state();

    let record = commands::add_timeline(&state, tokyo()).unwrap();
    let frame = commands::get_frame(&state).unwrap();
    assert_eq!(frame.rows.len(), 3);

    let row = frame.row(&record.id).unwrap();
    assert_eq!(row.offset_label, "GMT+9");
    assert_eq!(row.clock_text, "08:30:00 AM");
    assert_eq!(row.sync.minute_of_day.get(), 8 * 60 + 30);
    assert_eq!(row.current_category, Category::Awake);

    // sleeping after midnight keeps the first half-hour of each day awake
    assert_eq!(row.segments[0].category, Category::Awake);
    assert_eq!(row.segments[0].end, 30);

    let config = commands::get_config(&state).unwrap();
    assert_eq!(config.timelines.last().unwrap(), &record);

    let _ = std::fs::remove_file(path);
}

#[test]
fn bad_input_is_rejected_at_the_boundary() {
    let (state, path) = app_state();

    let mut broken = tokyo();
    broken.work_end = "18h30".into();
    let err = commands::add_timeline(&state, broken).unwrap_err();
    assert!(err.contains("18h30"), "{err}");

    assert!(commands::remove_timeline(&state, "does-not-exist".into()).is_err());
    assert_eq!(commands::get_config(&state).unwrap().timelines.len(), 2);

    let _ = std::fs::remove_file(path);
}

#[test]
fn toggling_sync_mode_updates_shift() {
    let (state, path) = app_state();

    let synced = commands::get_frame(&state).unwrap();
    assert!(synced.sync_mode);
    for row in &synced.rows {
        let landed = row.sync.indicator_percent + row.sync.shift_percent;
        assert!((landed - SYNC_LINE_POSITION * 50.0).abs() < 1e-9);
    }

    let unsynced = commands::set_sync_mode(&state, false).unwrap();
    assert!(unsynced.rows.iter().all(|row| row.sync.shift_percent == 0.0));
    assert_eq!(commands::get_frame(&state).unwrap(), unsynced);

    let _ = std::fs::remove_file(path);
}

#[test]
fn timezone_catalog_filters_by_offset() {
    let (state, path) = app_state();

    let all = commands::list_timezones(&state, None).unwrap();
    let nine = commands::list_timezones(&state, Some(9.0)).unwrap();
    assert!(nine.len() < all.len());
    assert!(nine.iter().any(|entry| entry.id == "Asia/Tokyo"));
    assert!(nine.iter().all(|entry| entry.id != "Asia/Shanghai"));

    let _ = std::fs::remove_file(path);
}

#[test]
fn core_functions_from_persisted_strings() {
    let schedule = TimelineSchedule::new(
        parse_time_of_day("08:00").unwrap(),
        parse_time_of_day("23:00").unwrap(),
        parse_time_of_day("09:00").unwrap(),
        parse_time_of_day("17:00").unwrap(),
    );
    let segments = compute_schedule_segments(&schedule);
    assert_eq!(segments.len(), 9);
    let total: u32 = segments.iter().map(|s| u32::from(s.duration_minutes())).sum();
    assert_eq!(total, 2880);
    let width: f64 = segments.iter().map(|s| s.width_percent()).sum();
    assert!((width - 100.0).abs() < 1e-9);

    let transform = compute_sync_transform(parse_time_of_day("00:00").unwrap(), true);
    assert_eq!(transform.indicator_percent, 0.0);
    assert!((transform.shift_percent - 100.0 / 12.0).abs() < 1e-9);
}
