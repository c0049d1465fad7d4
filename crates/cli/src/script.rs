use std::fs;
use std::path::Path;

use serde::Deserialize;

use pronun_core::speech::domain::recognition::{
    CaptureErrorKind, CaptureSignal, RecognitionResult,
};

/// What to do with a recording right after starting it.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Then {
    /// Block until the recognizer delivers its result.
    Wait,
    /// Press stop straight away.
    Stop,
    /// Abandon the attempt.
    Cancel,
    /// Keep recording; a later event decides.
    Hold,
}

/// One learner action in a practice script.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ScriptEvent {
    Record {
        #[serde(default)]
        heard: Option<String>,
        #[serde(default)]
        alternatives: Vec<String>,
        #[serde(default = "default_confidence")]
        confidence: f32,
        /// Recognizer error code such as `no-speech` or `not-allowed`.
        #[serde(default)]
        error: Option<String>,
        #[serde(default)]
        then: Option<Then>,
    },
    Stop,
    Cancel,
    Next,
    Prev,
    Listen,
    Play {
        segment: String,
    },
    Speed {
        rate: f32,
    },
    Known {
        word: String,
    },
    Write {
        text: String,
    },
}

fn default_confidence() -> f32 {
    1.0
}

impl ScriptEvent {
    /// The signal the scripted recognizer delivers for a `record` event.
    /// `None` means the attempt stays silent until stopped.
    pub fn capture_signal(&self) -> Option<Option<CaptureSignal>> {
        let ScriptEvent::Record {
            heard,
            alternatives,
            confidence,
            error,
            ..
        } = self
        else {
            return None;
        };
        let signal = match (heard, error) {
            (_, Some(code)) => Some(CaptureSignal::Failed(CaptureErrorKind::from_code(code))),
            (Some(text), None) => Some(CaptureSignal::Recognized(RecognitionResult::new(
                text.as_str(),
                *confidence,
                alternatives.clone(),
            ))),
            (None, None) => None,
        };
        Some(signal)
    }

    /// Follow-up for a `record` event: wait when a result is scripted,
    /// otherwise keep holding the microphone.
    pub fn then(&self) -> Then {
        match self {
            ScriptEvent::Record {
                heard, error, then, ..
            } => then.unwrap_or(if heard.is_some() || error.is_some() {
                Then::Wait
            } else {
                Then::Hold
            }),
            _ => Then::Hold,
        }
    }
}

pub fn load(path: &Path) -> Result<Vec<ScriptEvent>, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read script {}: {e}", path.display()))?;
    parse(&json)
}

pub fn parse(json: &str) -> Result<Vec<ScriptEvent>, Box<dyn std::error::Error>> {
    let events: Vec<ScriptEvent> = serde_json::from_str(json)?;
    for (i, event) in events.iter().enumerate() {
        if let ScriptEvent::Record { heard, error, .. } = event {
            if heard.is_none() && error.is_none() && event.then() == Then::Wait {
                return Err(format!(
                    "Script event {}: a silent recording cannot be waited on; use \"stop\" or \"cancel\"",
                    i + 1
                )
                .into());
            }
        }
    }
    Ok(events)
}
