use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("speech synthesis failed: {0}")]
    Failed(String),
}

/// Text to be read aloud.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub language_tag: String,
    pub rate: f32,
}

/// Handle to one playback started by a [`SpeechSynthesizer`].
pub trait Playback: Send {
    fn cancel(&mut self);

    /// False once playback has finished or been cancelled.
    fn is_active(&self) -> bool;
}

/// Domain interface for text-to-speech.
pub trait SpeechSynthesizer: Send {
    fn speak(&mut self, utterance: &Utterance) -> Result<Box<dyn Playback>, SynthesisError>;
}
