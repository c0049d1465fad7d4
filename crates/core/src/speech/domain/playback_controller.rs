use super::speech_synthesizer::{Playback, SpeechSynthesizer, SynthesisError, Utterance};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackToggle {
    Started,
    Stopped,
}

/// Owns the single active playback. Starting a new one always cancels the
/// previous one first, so at most one utterance is ever audible.
pub struct PlaybackController {
    synthesizer: Box<dyn SpeechSynthesizer>,
    active: Option<Box<dyn Playback>>,
}

impl PlaybackController {
    pub fn new(synthesizer: Box<dyn SpeechSynthesizer>) -> Self {
        Self {
            synthesizer,
            active: None,
        }
    }

    pub fn play(&mut self, utterance: &Utterance) -> Result<(), SynthesisError> {
        self.cancel();
        let playback = self.synthesizer.speak(utterance)?;
        self.active = Some(playback);
        Ok(())
    }

    /// Play button behaviour: stops whatever is audible, or starts `utterance`
    /// when nothing is.
    pub fn toggle(&mut self, utterance: &Utterance) -> Result<PlaybackToggle, SynthesisError> {
        if self.is_playing() {
            self.cancel();
            return Ok(PlaybackToggle::Stopped);
        }
        self.play(utterance)?;
        Ok(PlaybackToggle::Started)
    }

    pub fn cancel(&mut self) {
        if let Some(mut playback) = self.active.take() {
            if playback.is_active() {
                playback.cancel();
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        self.active.as_ref().is_some_and(|p| p.is_active())
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.cancel();
    }
}
