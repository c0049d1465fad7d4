use std::fmt;

/// Lifecycle of the recording panel for the current sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecorderState {
    Idle,
    Recording,
    Evaluating,
    Displayed,
}

impl RecorderState {
    /// The record button is live in `Idle` and `Displayed` (as "try again").
    pub fn can_start(&self) -> bool {
        matches!(self, RecorderState::Idle | RecorderState::Displayed)
    }

    pub fn is_recording(&self) -> bool {
        *self == RecorderState::Recording
    }
}

impl fmt::Display for RecorderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecorderState::Idle => "idle",
            RecorderState::Recording => "recording",
            RecorderState::Evaluating => "evaluating",
            RecorderState::Displayed => "displayed",
        };
        write!(f, "{name}")
    }
}
