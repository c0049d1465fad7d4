use std::collections::BTreeMap;

use crate::evaluation::pronunciation_evaluator::EvaluationOutcome;

/// Everything the learner has done on the page so far. Lives for one page
/// session; all mutation goes through the methods below.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    outcomes: BTreeMap<usize, EvaluationOutcome>,
    known_words: Vec<String>,
    replay_counts: Vec<(String, u32)>,
    writing: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the latest outcome for `index`, replacing any earlier attempt.
    pub fn record_outcome(&mut self, index: usize, outcome: EvaluationOutcome) {
        self.outcomes.insert(index, outcome);
    }

    pub fn outcome(&self, index: usize) -> Option<&EvaluationOutcome> {
        self.outcomes.get(&index)
    }

    /// Outcomes in ascending sentence index.
    pub fn outcomes(&self) -> impl Iterator<Item = (usize, &EvaluationOutcome)> {
        self.outcomes.iter().map(|(i, o)| (*i, o))
    }

    /// Marks a vocabulary item known, or unmarks it if already known.
    /// Returns whether the word is known afterwards.
    pub fn toggle_known_word(&mut self, word: &str) -> bool {
        if let Some(pos) = self.known_words.iter().position(|w| w == word) {
            self.known_words.remove(pos);
            false
        } else {
            self.known_words.push(word.to_string());
            true
        }
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.known_words.iter().any(|w| w == word)
    }

    /// Known words in the order they were marked.
    pub fn known_words(&self) -> &[String] {
        &self.known_words
    }

    /// Counts one more play of an audio segment and returns the new total.
    pub fn record_replay(&mut self, segment: &str) -> u32 {
        if let Some((_, count)) = self.replay_counts.iter_mut().find(|(s, _)| s == segment) {
            *count += 1;
            return *count;
        }
        self.replay_counts.push((segment.to_string(), 1));
        1
    }

    pub fn replay_count(&self, segment: &str) -> u32 {
        self.replay_counts
            .iter()
            .find(|(s, _)| s == segment)
            .map_or(0, |(_, c)| *c)
    }

    /// Replay counts in the order segments were first played.
    pub fn replay_counts(&self) -> &[(String, u32)] {
        &self.replay_counts
    }

    pub fn set_writing(&mut self, text: &str) {
        self.writing = text.to_string();
    }

    pub fn writing(&self) -> &str {
        &self.writing
    }
}
