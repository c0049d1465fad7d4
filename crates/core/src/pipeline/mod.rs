pub mod evaluation_view;
pub mod infrastructure;
pub mod pronunciation_check_use_case;
pub mod recorder_state;
