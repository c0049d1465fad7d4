use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crossbeam_channel::Sender;

use crate::speech::domain::recognition::CaptureSignal;
use crate::speech::domain::speech_capture::{
    CaptureError, CaptureOptions, CaptureSession, CaptureStopper, SpeechCapture,
};

/// Start/stop counters shared with whoever built the capture.
#[derive(Debug, Default)]
pub struct CaptureStats {
    started: AtomicUsize,
    stopped: AtomicUsize,
}

impl CaptureStats {
    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn stopped(&self) -> usize {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Sessions started but not yet released.
    pub fn held(&self) -> usize {
        self.started().saturating_sub(self.stopped())
    }
}

/// Pending scripted attempts, shared between the capture and whoever feeds it.
#[derive(Clone, Debug, Default)]
pub struct AttemptQueue {
    inner: Arc<Mutex<VecDeque<Option<CaptureSignal>>>>,
}

impl AttemptQueue {
    pub fn push(&self, attempt: Option<CaptureSignal>) {
        self.lock().push_back(attempt);
    }

    /// Drops attempts that no recording consumed.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn pop_front(&self) -> Option<Option<CaptureSignal>> {
        self.lock().pop_front()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Option<CaptureSignal>>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Capture collaborator that replays pre-programmed attempts in order.
///
/// `Some(signal)` is delivered as soon as the attempt starts. `None` keeps
/// the attempt silent until it is stopped, at which point it ends with no
/// result, like a recognizer that never heard anything.
pub struct ScriptedSpeechCapture {
    attempts: AttemptQueue,
    available: bool,
    stats: Arc<CaptureStats>,
}

impl ScriptedSpeechCapture {
    pub fn new(attempts: impl IntoIterator<Item = Option<CaptureSignal>>) -> Self {
        let queue = AttemptQueue::default();
        for attempt in attempts {
            queue.push(attempt);
        }
        Self {
            attempts: queue,
            available: true,
            stats: Arc::new(CaptureStats::default()),
        }
    }

    /// A capture reporting that the platform has no speech recognition.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new([])
        }
    }

    pub fn stats(&self) -> Arc<CaptureStats> {
        self.stats.clone()
    }

    /// Handle for adding attempts after the capture has been handed off.
    pub fn attempts(&self) -> AttemptQueue {
        self.attempts.clone()
    }

    pub fn remaining(&self) -> usize {
        self.attempts.len()
    }
}

struct ScriptedStopper {
    pending: Option<Sender<CaptureSignal>>,
    stats: Arc<CaptureStats>,
}

impl CaptureStopper for ScriptedStopper {
    fn stop(&mut self) {
        self.stats.stopped.fetch_add(1, Ordering::SeqCst);
        if let Some(tx) = self.pending.take() {
            let _ = tx.send(CaptureSignal::Ended);
        }
    }
}

impl SpeechCapture for ScriptedSpeechCapture {
    fn is_available(&self) -> bool {
        self.available
    }

    fn start(&mut self, options: &CaptureOptions) -> Result<CaptureSession, CaptureError> {
        if !self.available {
            return Err(CaptureError::Unavailable);
        }
        let attempt = self
            .attempts
            .pop_front()
            .ok_or_else(|| CaptureError::StartFailed("no scripted attempts left".to_string()))?;

        log::debug!(
            "Scripted capture started ({}, {} alternatives)",
            options.language_tag,
            options.max_alternatives
        );
        self.stats.started.fetch_add(1, Ordering::SeqCst);

        let (tx, rx) = crossbeam_channel::bounded(1);
        let pending = match attempt {
            Some(signal) => {
                let _ = tx.send(signal);
                None
            }
            None => Some(tx),
        };
        let stopper = ScriptedStopper {
            pending,
            stats: self.stats.clone(),
        };
        Ok(CaptureSession::new(rx, Box::new(stopper)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::domain::recognition::{CaptureErrorKind, RecognitionResult};

    #[test]
    fn test_delivers_scripted_signals_in_order() {
        let first = CaptureSignal::Recognized(RecognitionResult::new("one", 0.9, vec![]));
        let second = CaptureSignal::Failed(CaptureErrorKind::NoSpeech);
        let mut capture = ScriptedSpeechCapture::new([Some(first.clone()), Some(second.clone())]);
        let options = CaptureOptions::default();

        let session = capture.start(&options).unwrap();
        assert_eq!(session.wait(), first);
        drop(session);

        let session = capture.start(&options).unwrap();
        assert_eq!(session.wait(), second);
        drop(session);

        assert_eq!(capture.remaining(), 0);
        assert_eq!(capture.stats().started(), 2);
        assert_eq!(capture.stats().held(), 0);
    }

    #[test]
    fn test_silent_attempt_waits_until_stopped() {
        let mut capture = ScriptedSpeechCapture::new([None]);
        let session = capture.start(&CaptureOptions::default()).unwrap();
        assert!(session.try_signal().is_none());
        assert_eq!(capture.stats().held(), 1);
        assert_eq!(session.finish(), CaptureSignal::Ended);
        assert_eq!(capture.stats().held(), 0);
    }

    #[test]
    fn test_exhausted_script_fails_to_start() {
        let mut capture = ScriptedSpeechCapture::new([]);
        let err = capture.start(&CaptureOptions::default()).err();
        assert!(matches!(err, Some(CaptureError::StartFailed(_))));
        assert_eq!(capture.stats().started(), 0);
    }

    #[test]
    fn test_attempts_pushed_after_handoff_are_delivered() {
        let mut capture = ScriptedSpeechCapture::new([]);
        let queue = capture.attempts();
        let heard = CaptureSignal::Recognized(RecognitionResult::new("late", 0.7, vec![]));
        queue.push(Some(heard.clone()));
        assert_eq!(capture.remaining(), 1);

        let session = capture.start(&CaptureOptions::default()).unwrap();
        assert_eq!(session.wait(), heard);
        assert!(queue.is_empty());

        queue.push(None);
        queue.clear();
        assert_eq!(capture.remaining(), 0);
    }

    #[test]
    fn test_unavailable_capture_refuses_to_start() {
        let mut capture = ScriptedSpeechCapture::unavailable();
        assert!(!capture.is_available());
        assert_eq!(
            capture.start(&CaptureOptions::default()).err(),
            Some(CaptureError::Unavailable)
        );
    }
}
