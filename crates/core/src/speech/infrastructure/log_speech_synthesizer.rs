use crate::speech::domain::speech_synthesizer::{
    Playback, SpeechSynthesizer, SynthesisError, Utterance,
};

/// Synthesizer for headless runs: reports each utterance through the `log`
/// crate instead of producing audio. Playback ends as soon as it starts.
#[derive(Debug, Default)]
pub struct LogSpeechSynthesizer {
    spoken: usize,
}

impl LogSpeechSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spoken(&self) -> usize {
        self.spoken
    }
}

struct LoggedPlayback;

impl Playback for LoggedPlayback {
    fn cancel(&mut self) {}

    fn is_active(&self) -> bool {
        false
    }
}

impl SpeechSynthesizer for LogSpeechSynthesizer {
    fn speak(&mut self, utterance: &Utterance) -> Result<Box<dyn Playback>, SynthesisError> {
        if utterance.text.trim().is_empty() {
            return Err(SynthesisError::Failed("nothing to say".to_string()));
        }
        self.spoken += 1;
        log::info!(
            "Speaking ({} @ {:.2}x): {}",
            utterance.language_tag,
            utterance.rate,
            utterance.text
        );
        Ok(Box::new(LoggedPlayback))
    }
}
