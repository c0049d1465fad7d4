use crossbeam_channel::{Receiver, TryRecvError};
use thiserror::Error;

use super::recognition::CaptureSignal;
use crate::shared::constants::{LANGUAGE_TAG, MAX_ALTERNATIVES};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("speech recognition is not available on this device")]
    Unavailable,
    #[error("failed to start speech capture: {0}")]
    StartFailed(String),
}

/// Recognizer parameters for one attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptureOptions {
    pub language_tag: String,
    pub max_alternatives: usize,
    pub interim_results: bool,
    /// Keep listening after the first utterance.
    pub continuous: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            language_tag: LANGUAGE_TAG.to_string(),
            max_alternatives: MAX_ALTERNATIVES,
            interim_results: false,
            continuous: false,
        }
    }
}

/// Releases the microphone held by a capture session.
///
/// Called exactly once, when the owning [`CaptureSession`] finishes or drops.
/// A collaborator may deliver a final signal from inside `stop`.
pub trait CaptureStopper: Send {
    fn stop(&mut self);
}

/// One in-flight recording attempt.
///
/// Owns the capture resource: it is released when the session is finished
/// or dropped, whichever happens first, on every path.
pub struct CaptureSession {
    signals: Receiver<CaptureSignal>,
    stopper: Option<Box<dyn CaptureStopper>>,
}

impl CaptureSession {
    pub fn new(signals: Receiver<CaptureSignal>, stopper: Box<dyn CaptureStopper>) -> Self {
        Self {
            signals,
            stopper: Some(stopper),
        }
    }

    /// Non-blocking check for the terminal signal. A closed channel counts as `Ended`.
    pub fn try_signal(&self) -> Option<CaptureSignal> {
        match self.signals.try_recv() {
            Ok(signal) => Some(signal),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(CaptureSignal::Ended),
        }
    }

    /// Blocks until the collaborator delivers the terminal signal.
    pub fn wait(&self) -> CaptureSignal {
        self.signals.recv().unwrap_or(CaptureSignal::Ended)
    }

    /// User-initiated stop: releases the resource, then takes whatever
    /// signal was delivered up to that point.
    pub fn finish(mut self) -> CaptureSignal {
        self.release();
        self.try_signal().unwrap_or(CaptureSignal::Ended)
    }

    fn release(&mut self) {
        if let Some(mut stopper) = self.stopper.take() {
            stopper.stop();
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.release();
    }
}

/// Domain interface for microphone speech recognition.
///
/// Implementations deliver exactly one [`CaptureSignal`] per started session.
pub trait SpeechCapture: Send {
    fn is_available(&self) -> bool;

    fn start(&mut self, options: &CaptureOptions) -> Result<CaptureSession, CaptureError>;
}
