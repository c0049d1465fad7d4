use std::collections::HashSet;

use super::edit_distance::levenshtein;
use super::recognition::RecognitionResult;
use super::text_normalizer::tokenize;
use crate::shared::constants::DEFAULT_MAX_EDIT_DISTANCE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordStatus {
    Correct,
    Wrong,
}

/// Verdict for one word of the normalized target sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordJudgment {
    pub word: String,
    pub index: usize,
    pub status: WordStatus,
}

impl WordJudgment {
    pub fn is_correct(&self) -> bool {
        self.status == WordStatus::Correct
    }
}

/// Normalized tokens a target word may be matched against.
#[derive(Clone, Debug, Default)]
pub struct CandidatePools {
    /// Tokens of the primary transcript, in spoken order.
    pub primary: Vec<String>,
    /// Union of tokens across every alternative transcript.
    pub alternatives: HashSet<String>,
}

impl CandidatePools {
    pub fn from_recognition(result: &RecognitionResult) -> Self {
        Self {
            primary: tokenize(&result.primary_transcript),
            alternatives: result
                .alternatives
                .iter()
                .flat_map(|alt| tokenize(alt))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.alternatives.is_empty()
    }

    fn contains(&self, word: &str) -> bool {
        self.primary.iter().any(|t| t == word) || self.alternatives.contains(word)
    }

    fn tokens(&self) -> impl Iterator<Item = &String> {
        self.primary.iter().chain(self.alternatives.iter())
    }
}

/// Decides whether a target word was heard, tolerating small misrecognitions.
///
/// A word is Correct when it appears verbatim in either pool, or when some
/// token in either pool is within `max_distance` edits of it.
#[derive(Clone, Debug)]
pub struct FuzzyWordMatcher {
    max_distance: usize,
}

impl FuzzyWordMatcher {
    pub fn new(max_distance: usize) -> Self {
        Self { max_distance }
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// `word` must already be normalized.
    pub fn judge(&self, word: &str, pools: &CandidatePools) -> WordStatus {
        if pools.contains(word) {
            return WordStatus::Correct;
        }
        let close = pools
            .tokens()
            .any(|token| levenshtein(token, word) <= self.max_distance);
        if close {
            WordStatus::Correct
        } else {
            WordStatus::Wrong
        }
    }

    /// Judges every target token left to right.
    pub fn judge_all(&self, target_words: &[String], pools: &CandidatePools) -> Vec<WordJudgment> {
        target_words
            .iter()
            .enumerate()
            .map(|(index, word)| WordJudgment {
                word: word.clone(),
                index,
                status: self.judge(word, pools),
            })
            .collect()
    }
}

impl Default for FuzzyWordMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EDIT_DISTANCE)
    }
}
