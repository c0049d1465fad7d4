pub mod log_speech_synthesizer;
pub mod scripted_speech_capture;
