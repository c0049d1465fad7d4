pub mod pronunciation_evaluator;
pub mod score_band;
