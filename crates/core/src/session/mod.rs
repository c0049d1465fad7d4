pub mod sentence_navigator;
pub mod session_state;
pub mod summary_builder;
