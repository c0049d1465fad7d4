pub mod evaluation;
pub mod pipeline;
pub mod session;
pub mod shared;
pub mod speech;
