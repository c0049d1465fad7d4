use std::fmt;

use crate::evaluation::pronunciation_evaluator::Evaluation;
use crate::shared::lesson::TargetSentence;
use crate::speech::domain::recognition::CaptureErrorKind;

/// User-facing notices that end an attempt without a score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserMessage {
    /// The platform has no speech recognition at all.
    Unsupported,
    NoSpeech,
    PermissionDenied,
    CaptureFailed(String),
    DegenerateInput,
    PlaybackFailed(String),
}

impl UserMessage {
    pub fn from_capture_error(kind: &CaptureErrorKind) -> Self {
        match kind {
            CaptureErrorKind::NoSpeech => UserMessage::NoSpeech,
            CaptureErrorKind::NotAllowed => UserMessage::PermissionDenied,
            CaptureErrorKind::Other(reason) => UserMessage::CaptureFailed(reason.clone()),
        }
    }
}

impl fmt::Display for UserMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserMessage::Unsupported => {
                write!(f, "Speech recognition is not supported here. Please use Chrome.")
            }
            UserMessage::NoSpeech => write!(
                f,
                "No speech was detected. Try speaking a little louder and more clearly."
            ),
            UserMessage::PermissionDenied => write!(
                f,
                "Microphone access is not allowed. Please allow the microphone in your browser settings."
            ),
            UserMessage::CaptureFailed(reason) => write!(f, "Speech recognition error: {reason}"),
            UserMessage::DegenerateInput => {
                write!(f, "This sentence has no words to check.")
            }
            UserMessage::PlaybackFailed(reason) => write!(f, "Could not play audio: {reason}"),
        }
    }
}

/// Output port for the pronunciation panel: owns content and status, not layout.
pub trait EvaluationView: Send {
    /// Shows a freshly selected sentence with no word marked.
    fn render_sentence(&mut self, sentence: &TargetSentence);

    fn update_navigation(&mut self, position: &str, can_prev: bool, can_next: bool);

    fn set_recording(&mut self, recording: bool);

    /// Word marks, score, band, heard text and tips for a finished attempt.
    fn show_evaluation(&mut self, evaluation: &Evaluation, tip: &str);

    fn show_message(&mut self, message: &UserMessage);

    /// Hides the result panel.
    fn reset_result(&mut self);
}
