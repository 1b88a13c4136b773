use serde::Serialize;

const LABEL_STEP_HOURS: u16 = 3;
const HOURS_IN_WINDOW: u16 = 48;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourLabel {
    /// Hour within the 48-hour window, `0..48`.
    pub hour: u16,
    pub text: String,
    pub left_percent: f64,
}

/// Labels under the bar, one every three hours across both days.
pub fn hour_labels(use_24_hour: bool) -> Vec<HourLabel> {
    (0..HOURS_IN_WINDOW)
        .step_by(LABEL_STEP_HOURS as usize)
        .map(|hour| HourLabel {
            hour,
            text: label_text(hour % 24, use_24_hour),
            left_percent: f64::from(hour) / f64::from(HOURS_IN_WINDOW) * 100.0,
        })
        .collect()
}

fn label_text(hour: u16, use_24_hour: bool) -> String {
    if use_24_hour {
        return format!("{hour:02}");
    }
    match hour {
        0 => "12a".to_string(),
        12 => "12p".to_string(),
        h if h < 12 => format!("{h}a"),
        h => format!("{}p", h - 12),
    }
}
