use crate::{
    models::{NewTimeline, TimelineRecord},
    settings::AppConfig,
    timeline::{TimelineController, TimelineFrame},
    timezones::{timezones_by_offset, TimezoneEntry},
};

use crate::AppState;

fn controller_from_state(state: &AppState) -> &TimelineController {
    &state.timelines
}

pub fn get_config(state: &AppState) -> Result<AppConfig, String> {
    Ok(state.settings.config())
}

/// Latest frame, computing one on demand if the ticker has not published yet.
pub fn get_frame(state: &AppState) -> Result<TimelineFrame, String> {
    let controller = controller_from_state(state);
    Ok(controller.snapshot().unwrap_or_else(|| controller.refresh()))
}

pub fn add_timeline(state: &AppState, timeline: NewTimeline) -> Result<TimelineRecord, String> {
    let record = state
        .settings
        .add_timeline(timeline)
        .map_err(|e| format!("{e:#}"))?;
    controller_from_state(state).refresh();
    Ok(record)
}

pub fn update_timeline(state: &AppState, timeline: TimelineRecord) -> Result<(), String> {
    state
        .settings
        .update_timeline(timeline)
        .map_err(|e| format!("{e:#}"))?;
    controller_from_state(state).refresh();
    Ok(())
}

pub fn remove_timeline(state: &AppState, id: String) -> Result<TimelineRecord, String> {
    let removed = state
        .settings
        .remove_timeline(&id)
        .map_err(|e| format!("{e:#}"))?;
    controller_from_state(state).refresh();
    Ok(removed)
}

pub fn set_sync_mode(state: &AppState, enabled: bool) -> Result<TimelineFrame, String> {
    state
        .settings
        .set_sync_mode(enabled)
        .map_err(|e| format!("{e:#}"))?;
    Ok(controller_from_state(state).refresh())
}

pub fn set_use_24_hour(state: &AppState, enabled: bool) -> Result<TimelineFrame, String> {
    state
        .settings
        .set_use_24_hour(enabled)
        .map_err(|e| format!("{e:#}"))?;
    Ok(controller_from_state(state).refresh())
}

pub fn set_compact_mode(state: &AppState, enabled: bool) -> Result<TimelineFrame, String> {
    state
        .settings
        .set_compact_mode(enabled)
        .map_err(|e| format!("{e:#}"))?;
    Ok(controller_from_state(state).refresh())
}

pub fn list_timezones(
    state: &AppState,
    offset_hours: Option<f64>,
) -> Result<Vec<TimezoneEntry>, String> {
    Ok(timezones_by_offset(state.clock.now(), offset_hours))
}
