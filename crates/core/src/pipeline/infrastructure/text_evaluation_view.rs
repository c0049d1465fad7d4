use std::io::Write;

use crate::evaluation::pronunciation_evaluator::Evaluation;
use crate::pipeline::evaluation_view::{EvaluationView, UserMessage};
use crate::shared::lesson::TargetSentence;

/// Renders the pronunciation panel as plain text lines.
///
/// Correct words are printed as-is, missed words wrapped in `[..]`.
pub struct TextEvaluationView<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> TextEvaluationView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            log::warn!("Failed to write evaluation output: {e}");
        }
    }
}

impl<W: Write + Send> EvaluationView for TextEvaluationView<W> {
    fn render_sentence(&mut self, sentence: &TargetSentence) {
        self.line(&format!("\n  {}", sentence.text));
    }

    fn update_navigation(&mut self, position: &str, _can_prev: bool, _can_next: bool) {
        self.line(&format!("[{position}]"));
    }

    /// Only the start is announced; the attempt's outcome marks its end.
    fn set_recording(&mut self, recording: bool) {
        if recording {
            self.line("● Listening...");
        }
    }

    fn show_evaluation(&mut self, evaluation: &Evaluation, tip: &str) {
        let marked: Vec<String> = evaluation
            .judgments
            .iter()
            .map(|j| {
                if j.is_correct() {
                    j.word.clone()
                } else {
                    format!("[{}]", j.word)
                }
            })
            .collect();
        self.line(&format!("  {}", marked.join(" ")));
        self.line(&format!(
            "  {}% {} {}",
            evaluation.outcome.score,
            evaluation.band.label(),
            evaluation.band.detail()
        ));
        self.line(&format!("  You said: \"{}\"", evaluation.outcome.heard_text));
        if !evaluation.outcome.wrong_words.is_empty() {
            self.line(&format!("  Missed: {}", evaluation.outcome.wrong_words.join(", ")));
        }
        if !tip.is_empty() {
            self.line(&format!("  Tip: {tip}"));
        }
    }

    fn show_message(&mut self, message: &UserMessage) {
        self.line(&format!("  ! {message}"));
    }

    /// Printed results stay in the scrollback; the next sentence header
    /// already separates them.
    fn reset_result(&mut self) {}
}
