use thiserror::Error;

/// Rejected schedule input. Raised at the parsing boundary so the segmenter
/// only ever sees well-formed minutes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid schedule time {input:?}: {reason}")]
    InvalidScheduleTime { input: String, reason: &'static str },
}

impl ScheduleError {
    pub(crate) fn invalid(input: impl Into<String>, reason: &'static str) -> Self {
        ScheduleError::InvalidScheduleTime {
            input: input.into(),
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("unknown timezone {0:?}")]
    UnknownTimezone(String),
}
