use crate::shared::constants::MAX_ALTERNATIVES;

/// What the recognizer heard for one attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct RecognitionResult {
    pub primary_transcript: String,
    /// Recognizer confidence for the primary transcript, 0.0-1.0.
    pub confidence: f32,
    /// Competing transcripts in recognizer order, at most [`MAX_ALTERNATIVES`].
    pub alternatives: Vec<String>,
}

impl RecognitionResult {
    pub fn new(primary_transcript: impl Into<String>, confidence: f32, alternatives: Vec<String>) -> Self {
        let mut alternatives = alternatives;
        alternatives.truncate(MAX_ALTERNATIVES);
        Self {
            primary_transcript: primary_transcript.into(),
            confidence: confidence.clamp(0.0, 1.0),
            alternatives,
        }
    }

    /// A result with no transcript and no alternatives.
    pub fn empty() -> Self {
        Self::new("", 0.0, Vec::new())
    }
}

/// Failure kinds reported by the capture collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureErrorKind {
    NoSpeech,
    NotAllowed,
    /// Anything else, with the collaborator's raw reason.
    Other(String),
}

impl CaptureErrorKind {
    /// Maps the Web Speech API error codes onto the three kinds.
    pub fn from_code(code: &str) -> Self {
        match code {
            "no-speech" => CaptureErrorKind::NoSpeech,
            "not-allowed" | "service-not-allowed" => CaptureErrorKind::NotAllowed,
            other => CaptureErrorKind::Other(other.to_string()),
        }
    }
}

/// The single terminal signal of a capture attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum CaptureSignal {
    Recognized(RecognitionResult),
    Failed(CaptureErrorKind),
    /// Session ended without producing a result.
    Ended,
}
