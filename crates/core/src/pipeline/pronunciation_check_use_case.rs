use thiserror::Error;

use super::evaluation_view::{EvaluationView, UserMessage};
use super::recorder_state::RecorderState;
use crate::evaluation::pronunciation_evaluator::{
    Evaluation, EvaluationError, PronunciationEvaluator,
};
use crate::session::sentence_navigator::SentenceNavigator;
use crate::session::session_state::SessionState;
use crate::session::summary_builder::build_summary;
use crate::shared::lesson::LessonContent;
use crate::shared::settings::Settings;
use crate::speech::domain::playback_controller::{PlaybackController, PlaybackToggle};
use crate::speech::domain::recognition::{CaptureErrorKind, CaptureSignal};
use crate::speech::domain::speech_capture::{
    CaptureError, CaptureOptions, CaptureSession, SpeechCapture,
};
use crate::speech::domain::speech_synthesizer::{SpeechSynthesizer, SynthesisError, Utterance};

#[derive(Error, Debug)]
pub enum PronunciationCheckError {
    #[error("cannot start recording while {0}")]
    Busy(RecorderState),
    #[error("no recording in progress")]
    NotRecording,
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Playback(#[from] SynthesisError),
    #[error("lesson has no audio for segment {0:?}")]
    MissingSegment(String),
    #[error("speech rate must be in (0, 10], got {0}")]
    InvalidRate(f32),
}

/// How a recording attempt ended.
#[derive(Clone, Debug, PartialEq)]
pub enum AttemptResult {
    Evaluated(Evaluation),
    Failed(CaptureErrorKind),
    /// Capture ended without a transcript; nothing is shown or stored.
    NoResult,
}

/// Drives the pronunciation practice panel for one lesson page.
///
/// Owns the sentence cursor, the single in-flight capture session, the
/// single active playback and the page's [`SessionState`]. Every path out
/// of `Recording` drops the capture session, which releases the microphone.
pub struct PronunciationCheckUseCase {
    lesson: LessonContent,
    navigator: SentenceNavigator,
    evaluator: PronunciationEvaluator,
    capture: Box<dyn SpeechCapture>,
    capture_options: CaptureOptions,
    playback: PlaybackController,
    view: Box<dyn EvaluationView>,
    session: SessionState,
    state: RecorderState,
    active: Option<CaptureSession>,
    language_tag: String,
    model_sentence_rate: f32,
    speech_rate: f32,
}

impl PronunciationCheckUseCase {
    pub fn new(
        lesson: LessonContent,
        capture: Box<dyn SpeechCapture>,
        synthesizer: Box<dyn SpeechSynthesizer>,
        view: Box<dyn EvaluationView>,
        settings: &Settings,
    ) -> Self {
        let mut use_case = Self {
            navigator: SentenceNavigator::new(lesson.sentences().len()),
            lesson,
            evaluator: PronunciationEvaluator::from_settings(settings),
            capture,
            capture_options: settings.capture_options(),
            playback: PlaybackController::new(synthesizer),
            view,
            session: SessionState::new(),
            state: RecorderState::Idle,
            active: None,
            language_tag: settings.language_tag.clone(),
            model_sentence_rate: settings.model_sentence_rate,
            speech_rate: settings.speech_rate,
        };
        use_case.show_current();
        use_case
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.navigator.index()
    }

    pub fn lesson(&self) -> &LessonContent {
        &self.lesson
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn start_recording(&mut self) -> Result<(), PronunciationCheckError> {
        if !self.state.can_start() {
            log::warn!("Record pressed while {}; ignoring", self.state);
            return Err(PronunciationCheckError::Busy(self.state));
        }
        if !self.capture.is_available() {
            self.view.show_message(&UserMessage::Unsupported);
            return Err(CaptureError::Unavailable.into());
        }

        match self.capture.start(&self.capture_options) {
            Ok(session) => {
                self.active = Some(session);
                self.state = RecorderState::Recording;
                self.view.set_recording(true);
                log::info!(
                    "Recording attempt at sentence {}",
                    self.navigator.position()
                );
                Ok(())
            }
            Err(e) => {
                let message = match &e {
                    CaptureError::Unavailable => UserMessage::Unsupported,
                    CaptureError::StartFailed(reason) => UserMessage::CaptureFailed(reason.clone()),
                };
                log::warn!("Could not start capture: {e}");
                self.view.show_message(&message);
                self.state = RecorderState::Idle;
                Err(e.into())
            }
        }
    }

    /// Blocks until the in-flight attempt delivers its terminal signal.
    pub fn await_result(&mut self) -> Result<AttemptResult, PronunciationCheckError> {
        let signal = match &self.active {
            Some(session) => session.wait(),
            None => return Err(PronunciationCheckError::NotRecording),
        };
        self.conclude(signal)
    }

    /// Non-blocking variant of [`Self::await_result`]: `Ok(None)` while the
    /// recognizer is still listening.
    pub fn poll(&mut self) -> Result<Option<AttemptResult>, PronunciationCheckError> {
        let signal = match &self.active {
            Some(session) => session.try_signal(),
            None => return Err(PronunciationCheckError::NotRecording),
        };
        match signal {
            Some(signal) => self.conclude(signal).map(Some),
            None => Ok(None),
        }
    }

    /// User pressed stop: release the microphone and evaluate whatever was
    /// recognized up to that point.
    pub fn stop_recording(&mut self) -> Result<AttemptResult, PronunciationCheckError> {
        let session = self
            .active
            .take()
            .ok_or(PronunciationCheckError::NotRecording)?;
        let signal = session.finish();
        self.conclude(signal)
    }

    /// Abandons the in-flight attempt without evaluating it.
    /// Returns whether there was one.
    pub fn cancel_recording(&mut self) -> bool {
        let Some(session) = self.active.take() else {
            return false;
        };
        drop(session);
        self.state = RecorderState::Idle;
        self.view.set_recording(false);
        log::info!("Recording cancelled");
        true
    }

    fn conclude(&mut self, signal: CaptureSignal) -> Result<AttemptResult, PronunciationCheckError> {
        self.active = None;
        self.view.set_recording(false);

        match signal {
            CaptureSignal::Recognized(recognition) => {
                self.state = RecorderState::Evaluating;
                let index = self.navigator.index();
                let Some(sentence) = self.lesson.sentences().get(index) else {
                    self.state = RecorderState::Idle;
                    return Err(EvaluationError::DegenerateTarget(String::new()).into());
                };

                match self.evaluator.evaluate(sentence, &recognition) {
                    Ok(evaluation) => {
                        log::info!(
                            "Sentence {} scored {}% ({}), heard {:?}",
                            index + 1,
                            evaluation.outcome.score,
                            evaluation.band,
                            evaluation.outcome.heard_text
                        );
                        self.session.record_outcome(index, evaluation.outcome.clone());
                        self.view.show_evaluation(&evaluation, &sentence.tip);
                        self.state = RecorderState::Displayed;
                        Ok(AttemptResult::Evaluated(evaluation))
                    }
                    Err(e) => {
                        log::warn!("{e}");
                        self.view.show_message(&UserMessage::DegenerateInput);
                        self.state = RecorderState::Idle;
                        Err(e.into())
                    }
                }
            }
            CaptureSignal::Failed(kind) => {
                log::warn!("Capture failed: {kind:?}");
                self.view.show_message(&UserMessage::from_capture_error(&kind));
                self.state = RecorderState::Idle;
                Ok(AttemptResult::Failed(kind))
            }
            CaptureSignal::Ended => {
                log::debug!("Capture ended with no transcript");
                self.state = RecorderState::Idle;
                Ok(AttemptResult::NoResult)
            }
        }
    }

    /// Returns whether the cursor moved. Moving drops any in-flight attempt
    /// and clears the result panel.
    pub fn next_sentence(&mut self) -> bool {
        self.navigate(1)
    }

    pub fn prev_sentence(&mut self) -> bool {
        self.navigate(-1)
    }

    fn navigate(&mut self, delta: isize) -> bool {
        if !self.navigator.step(delta) {
            return false;
        }
        if self.state.is_recording() {
            self.cancel_recording();
        }
        self.state = RecorderState::Idle;
        self.view.reset_result();
        self.show_current();
        true
    }

    fn show_current(&mut self) {
        if let Some(sentence) = self.lesson.sentences().get(self.navigator.index()) {
            self.view.render_sentence(sentence);
        }
        self.view.update_navigation(
            &self.navigator.position(),
            self.navigator.can_prev(),
            self.navigator.can_next(),
        );
    }

    /// Reads the current sentence aloud at the model rate. Not counted as a replay.
    pub fn listen_model_sentence(&mut self) -> Result<PlaybackToggle, PronunciationCheckError> {
        let text = self
            .lesson
            .sentences()
            .get(self.navigator.index())
            .map(|s| s.text.clone())
            .unwrap_or_default();
        let utterance = self.utterance(text, self.model_sentence_rate);
        self.toggle_playback(&utterance)
    }

    /// Play/stop toggle for a lesson passage. Only starts count as replays.
    pub fn play_segment(&mut self, segment: &str) -> Result<PlaybackToggle, PronunciationCheckError> {
        let text = self
            .lesson
            .segment_text(segment)
            .ok_or_else(|| PronunciationCheckError::MissingSegment(segment.to_string()))?;
        let utterance = self.utterance(text, self.speech_rate);
        let toggle = self.toggle_playback(&utterance)?;
        if toggle == PlaybackToggle::Started {
            let plays = self.session.record_replay(segment);
            log::info!("Playing {segment} (play {plays})");
        }
        Ok(toggle)
    }

    pub fn stop_audio(&mut self) {
        self.playback.cancel();
    }

    pub fn set_speech_rate(&mut self, rate: f32) -> Result<(), PronunciationCheckError> {
        if !(rate > 0.0 && rate <= 10.0) {
            return Err(PronunciationCheckError::InvalidRate(rate));
        }
        self.speech_rate = rate;
        Ok(())
    }

    fn utterance(&self, text: String, rate: f32) -> Utterance {
        Utterance {
            text,
            language_tag: self.language_tag.clone(),
            rate,
        }
    }

    fn toggle_playback(
        &mut self,
        utterance: &Utterance,
    ) -> Result<PlaybackToggle, PronunciationCheckError> {
        self.playback.toggle(utterance).map_err(|e| {
            self.view.show_message(&UserMessage::PlaybackFailed(e.to_string()));
            e.into()
        })
    }

    pub fn toggle_known_word(&mut self, word: &str) -> bool {
        if !self.lesson.has_vocab(word) {
            log::debug!("Marking {word:?}, which is not in this lesson's vocabulary");
        }
        self.session.toggle_known_word(word)
    }

    pub fn set_writing(&mut self, text: &str) {
        self.session.set_writing(text);
    }

    pub fn summary(&self) -> String {
        build_summary(&self.lesson, &self.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lesson::fixtures;
    use crate::speech::domain::recognition::RecognitionResult;
    use crate::speech::domain::speech_synthesizer::Playback;
    use crate::speech::infrastructure::scripted_speech_capture::{
        CaptureStats, ScriptedSpeechCapture,
    };
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    // ─── Stubs ───

    struct StubView {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl EvaluationView for StubView {
        fn render_sentence(&mut self, sentence: &crate::shared::lesson::TargetSentence) {
            self.events.lock().unwrap().push(format!("sentence {}", sentence.text));
        }

        fn update_navigation(&mut self, position: &str, can_prev: bool, can_next: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("nav {position} {can_prev} {can_next}"));
        }

        fn set_recording(&mut self, recording: bool) {
            self.events.lock().unwrap().push(format!("recording {recording}"));
        }

        fn show_evaluation(&mut self, evaluation: &Evaluation, tip: &str) {
            self.events
                .lock()
                .unwrap()
                .push(format!("score {} tip {tip}", evaluation.outcome.score));
        }

        fn show_message(&mut self, message: &UserMessage) {
            self.events.lock().unwrap().push(format!("message {message:?}"));
        }

        fn reset_result(&mut self) {
            self.events.lock().unwrap().push("reset".to_string());
        }
    }

    struct StubPlayback {
        active: Arc<AtomicBool>,
    }

    impl Playback for StubPlayback {
        fn cancel(&mut self) {
            self.active.store(false, Ordering::SeqCst);
        }

        fn is_active(&self) -> bool {
            self.active.load(Ordering::SeqCst)
        }
    }

    #[derive(Default)]
    struct StubSynthesizer {
        spoken: Arc<Mutex<Vec<Utterance>>>,
        active: Arc<AtomicBool>,
    }

    impl SpeechSynthesizer for StubSynthesizer {
        fn speak(&mut self, utterance: &Utterance) -> Result<Box<dyn Playback>, SynthesisError> {
            self.spoken.lock().unwrap().push(utterance.clone());
            self.active.store(true, Ordering::SeqCst);
            Ok(Box::new(StubPlayback {
                active: self.active.clone(),
            }))
        }
    }

    struct Harness {
        use_case: PronunciationCheckUseCase,
        events: Arc<Mutex<Vec<String>>>,
        stats: Arc<CaptureStats>,
        spoken: Arc<Mutex<Vec<Utterance>>>,
        audio_active: Arc<AtomicBool>,
    }

    impl Harness {
        fn new(attempts: Vec<Option<CaptureSignal>>) -> Self {
            Self::with_capture(ScriptedSpeechCapture::new(attempts))
        }

        fn with_capture(capture: ScriptedSpeechCapture) -> Self {
            let events = Arc::new(Mutex::new(Vec::new()));
            let stats = capture.stats();
            let synthesizer = StubSynthesizer::default();
            let spoken = synthesizer.spoken.clone();
            let audio_active = synthesizer.active.clone();
            let use_case = PronunciationCheckUseCase::new(
                fixtures::lesson(),
                Box::new(capture),
                Box::new(synthesizer),
                Box::new(StubView {
                    events: events.clone(),
                }),
                &Settings::default(),
            );
            Self {
                use_case,
                events,
                stats,
                spoken,
                audio_active,
            }
        }

        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        fn last_event(&self) -> String {
            self.events().last().cloned().unwrap_or_default()
        }
    }

    fn heard(text: &str) -> Option<CaptureSignal> {
        Some(CaptureSignal::Recognized(RecognitionResult::new(
            text,
            0.9,
            vec![],
        )))
    }

    fn failed(kind: CaptureErrorKind) -> Option<CaptureSignal> {
        Some(CaptureSignal::Failed(kind))
    }

    #[test]
    fn test_initial_render_shows_first_sentence() {
        let h = Harness::new(vec![]);
        assert_eq!(
            h.events(),
            vec![
                "sentence Could I get a scone, please?".to_string(),
                "nav 1 / 5 false true".to_string(),
            ]
        );
        assert_eq!(h.use_case.state(), RecorderState::Idle);
    }

    #[test]
    fn test_recognized_attempt_is_scored_and_stored() {
        let mut h = Harness::new(vec![heard("could I get a scone please")]);
        h.use_case.start_recording().unwrap();
        assert_eq!(h.use_case.state(), RecorderState::Recording);

        let result = h.use_case.await_result().unwrap();
        let AttemptResult::Evaluated(evaluation) = result else {
            panic!("expected an evaluation, got {result:?}");
        };
        assert_eq!(evaluation.outcome.score, 100);
        assert_eq!(h.use_case.state(), RecorderState::Displayed);
        assert_eq!(h.use_case.session().outcome(0).unwrap().score, 100);
        assert_eq!(h.last_event(), "score 100 tip Link 'get a' into 'geda'.");
        assert_eq!(h.stats.held(), 0);
    }

    #[test]
    fn test_retry_overwrites_outcome_for_same_sentence() {
        let mut h = Harness::new(vec![heard("could I get"), heard("could I get a scone please")]);
        h.use_case.start_recording().unwrap();
        h.use_case.await_result().unwrap();
        assert_eq!(h.use_case.session().outcome(0).unwrap().score, 50);

        h.use_case.start_recording().unwrap();
        h.use_case.await_result().unwrap();
        assert_eq!(h.use_case.session().outcome(0).unwrap().score, 100);
        assert_eq!(h.use_case.session().outcomes().count(), 1);
    }

    #[test]
    fn test_start_while_recording_is_busy() {
        let mut h = Harness::new(vec![None, None]);
        h.use_case.start_recording().unwrap();
        let err = h.use_case.start_recording().unwrap_err();
        assert!(matches!(
            err,
            PronunciationCheckError::Busy(RecorderState::Recording)
        ));
        assert_eq!(h.stats.started(), 1);
        assert_eq!(h.stats.held(), 1);
    }

    #[test]
    fn test_no_speech_returns_to_idle_with_message() {
        let mut h = Harness::new(vec![failed(CaptureErrorKind::NoSpeech)]);
        h.use_case.start_recording().unwrap();
        let result = h.use_case.await_result().unwrap();
        assert_eq!(result, AttemptResult::Failed(CaptureErrorKind::NoSpeech));
        assert_eq!(h.use_case.state(), RecorderState::Idle);
        assert_eq!(h.last_event(), "message NoSpeech");
        assert!(h.use_case.session().outcome(0).is_none());
        assert_eq!(h.stats.held(), 0);
    }

    #[test]
    fn test_permission_denied_has_its_own_message() {
        let mut h = Harness::new(vec![failed(CaptureErrorKind::NotAllowed)]);
        h.use_case.start_recording().unwrap();
        h.use_case.await_result().unwrap();
        assert_eq!(h.last_event(), "message PermissionDenied");
        assert_eq!(h.stats.held(), 0);
    }

    #[test]
    fn test_user_stop_without_result_stores_nothing() {
        let mut h = Harness::new(vec![None]);
        h.use_case.start_recording().unwrap();
        assert_eq!(h.use_case.poll().unwrap(), None);

        let result = h.use_case.stop_recording().unwrap();
        assert_eq!(result, AttemptResult::NoResult);
        assert_eq!(h.use_case.state(), RecorderState::Idle);
        assert!(h.use_case.session().outcome(0).is_none());
        assert_eq!(h.stats.held(), 0);
    }

    #[test]
    fn test_cancel_keeps_prior_outcome() {
        let mut h = Harness::new(vec![heard("could I get a scone please"), None]);
        h.use_case.start_recording().unwrap();
        h.use_case.await_result().unwrap();

        h.use_case.start_recording().unwrap();
        assert!(h.use_case.cancel_recording());

        assert_eq!(h.use_case.state(), RecorderState::Idle);
        assert_eq!(h.stats.held(), 0);
        assert_eq!(h.use_case.session().outcome(0).unwrap().score, 100);
        assert_eq!(h.use_case.session().outcomes().count(), 1);
        assert!(!h.use_case.cancel_recording());
    }

    #[test]
    fn test_stop_when_idle_is_an_error() {
        let mut h = Harness::new(vec![]);
        assert!(matches!(
            h.use_case.stop_recording(),
            Err(PronunciationCheckError::NotRecording)
        ));
        assert!(matches!(
            h.use_case.poll(),
            Err(PronunciationCheckError::NotRecording)
        ));
    }

    #[test]
    fn test_navigation_cancels_in_flight_attempt() {
        let mut h = Harness::new(vec![None]);
        h.use_case.start_recording().unwrap();

        assert!(h.use_case.next_sentence());
        assert_eq!(h.use_case.current_index(), 1);
        assert_eq!(h.use_case.state(), RecorderState::Idle);
        assert_eq!(h.stats.held(), 0);
        assert_eq!(h.use_case.session().outcomes().count(), 0);

        let events = h.events();
        let tail = &events[events.len() - 4..];
        assert_eq!(
            tail,
            [
                "recording false".to_string(),
                "reset".to_string(),
                "sentence I love scones with jam and cream.".to_string(),
                "nav 2 / 5 true true".to_string(),
            ]
        );
    }

    #[test]
    fn test_navigation_is_bounded() {
        let mut h = Harness::new(vec![]);
        assert!(!h.use_case.prev_sentence());
        for _ in 0..4 {
            assert!(h.use_case.next_sentence());
        }
        assert!(!h.use_case.next_sentence());
        assert_eq!(h.use_case.current_index(), 4);
        assert_eq!(h.last_event(), "nav 5 / 5 true false");
    }

    #[test]
    fn test_outcome_is_stored_under_sentence_at_start() {
        let mut h = Harness::new(vec![heard("add the flour and mix gently")]);
        h.use_case.step_to(3);
        h.use_case.start_recording().unwrap();
        h.use_case.await_result().unwrap();
        assert_eq!(h.use_case.session().outcome(3).unwrap().score, 100);
        assert!(h.use_case.session().outcome(0).is_none());
    }

    #[test]
    fn test_unavailable_capture_shows_unsupported() {
        let mut h = Harness::with_capture(ScriptedSpeechCapture::unavailable());
        let err = h.use_case.start_recording().unwrap_err();
        assert!(matches!(
            err,
            PronunciationCheckError::Capture(CaptureError::Unavailable)
        ));
        assert_eq!(h.last_event(), "message Unsupported");
        assert_eq!(h.use_case.state(), RecorderState::Idle);
    }

    #[test]
    fn test_start_failure_leaves_idle() {
        let mut h = Harness::new(vec![]);
        let err = h.use_case.start_recording().unwrap_err();
        assert!(matches!(
            err,
            PronunciationCheckError::Capture(CaptureError::StartFailed(_))
        ));
        assert_eq!(h.use_case.state(), RecorderState::Idle);
        assert_eq!(h.stats.held(), 0);
    }

    #[test]
    fn test_play_segment_counts_only_starts() {
        let mut h = Harness::new(vec![]);
        assert_eq!(
            h.use_case.play_segment("recipe").unwrap(),
            PlaybackToggle::Started
        );
        assert_eq!(
            h.use_case.play_segment("recipe").unwrap(),
            PlaybackToggle::Stopped
        );
        assert_eq!(
            h.use_case.play_segment("recipe").unwrap(),
            PlaybackToggle::Started
        );
        assert_eq!(h.use_case.session().replay_count("recipe"), 2);
        assert_eq!(h.spoken.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_model_sentence_uses_model_rate_and_is_not_counted() {
        let mut h = Harness::new(vec![]);
        h.use_case.set_speech_rate(1.2).unwrap();
        h.use_case.listen_model_sentence().unwrap();

        let spoken = h.spoken.lock().unwrap().clone();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].text, "Could I get a scone, please?");
        assert_eq!(spoken[0].rate, 0.85);
        assert_eq!(spoken[0].language_tag, "en-AU");
        assert!(h.use_case.session().replay_counts().is_empty());
    }

    #[test]
    fn test_segment_uses_selected_speed() {
        let mut h = Harness::new(vec![]);
        h.use_case.set_speech_rate(0.7).unwrap();
        h.use_case.play_segment("conversation").unwrap();
        let spoken = h.spoken.lock().unwrap().clone();
        assert_eq!(spoken[0].rate, 0.7);
        assert_eq!(spoken[0].text, "Hi there! ... One scone, please.");
    }

    #[test]
    fn test_stop_audio_cancels_playback() {
        let mut h = Harness::new(vec![]);
        h.use_case.play_segment("recipe").unwrap();
        assert!(h.audio_active.load(Ordering::SeqCst));
        h.use_case.stop_audio();
        assert!(!h.audio_active.load(Ordering::SeqCst));
    }

    #[test]
    fn test_missing_segment_is_an_error() {
        let mut h = Harness::new(vec![]);
        let err = h.use_case.play_segment("listening-a").unwrap_err();
        assert!(matches!(err, PronunciationCheckError::MissingSegment(_)));
        assert!(h.use_case.session().replay_counts().is_empty());
    }

    #[test]
    fn test_invalid_speech_rate_rejected() {
        let mut h = Harness::new(vec![]);
        assert!(h.use_case.set_speech_rate(0.0).is_err());
        assert!(h.use_case.set_speech_rate(f32::NAN).is_err());
    }

    #[test]
    fn test_summary_reflects_session() {
        let mut h = Harness::new(vec![heard("could I get a scone please")]);
        h.use_case.start_recording().unwrap();
        h.use_case.await_result().unwrap();
        h.use_case.toggle_known_word("flour");
        h.use_case.set_writing("Scones are great.");

        let summary = h.use_case.summary();
        assert!(summary.contains("■ Words checked (1):\nflour\n"));
        assert!(summary.contains("→ 100% (heard: \"could I get a scone please\")"));
        assert!(summary.contains("Scones are great."));
    }

    impl PronunciationCheckUseCase {
        fn step_to(&mut self, index: usize) {
            while self.current_index() < index {
                self.next_sentence();
            }
        }
    }
}
