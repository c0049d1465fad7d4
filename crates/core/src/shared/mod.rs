pub mod constants;
pub mod lesson;
pub mod settings;
