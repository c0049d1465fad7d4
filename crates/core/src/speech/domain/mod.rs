pub mod edit_distance;
pub mod playback_controller;
pub mod recognition;
pub mod speech_capture;
pub mod speech_synthesizer;
pub mod text_normalizer;
pub mod word_matcher;
