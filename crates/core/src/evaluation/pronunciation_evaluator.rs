use thiserror::Error;

use super::score_band::{BandThresholds, ScoreBand};
use crate::shared::lesson::TargetSentence;
use crate::shared::settings::Settings;
use crate::speech::domain::recognition::RecognitionResult;
use crate::speech::domain::text_normalizer::tokenize;
use crate::speech::domain::word_matcher::{CandidatePools, FuzzyWordMatcher, WordJudgment};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("target sentence {0:?} has no words to score")]
    DegenerateTarget(String),
}

/// Stored result of one evaluated attempt at one sentence index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationOutcome {
    pub score: u8,
    pub heard_text: String,
    pub target_text: String,
    pub wrong_words: Vec<String>,
}

/// Full result of an evaluation: per-word verdicts plus the stored outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub judgments: Vec<WordJudgment>,
    pub outcome: EvaluationOutcome,
    pub band: ScoreBand,
    pub confidence: f32,
}

impl Evaluation {
    pub fn correct_count(&self) -> usize {
        self.judgments.iter().filter(|j| j.is_correct()).count()
    }
}

/// `round(correct / total * 100)`, half rounded up.
pub fn score(correct: usize, total: usize) -> Result<u8, EvaluationError> {
    if total == 0 {
        return Err(EvaluationError::DegenerateTarget(String::new()));
    }
    let correct = correct.min(total);
    Ok(((correct * 200 + total) / (2 * total)) as u8)
}

/// Scores a recognized attempt against a target sentence word by word.
#[derive(Clone, Debug, Default)]
pub struct PronunciationEvaluator {
    matcher: FuzzyWordMatcher,
    thresholds: BandThresholds,
}

impl PronunciationEvaluator {
    pub fn new(matcher: FuzzyWordMatcher, thresholds: BandThresholds) -> Self {
        Self { matcher, thresholds }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            FuzzyWordMatcher::new(settings.max_edit_distance),
            settings.band_thresholds(),
        )
    }

    pub fn thresholds(&self) -> BandThresholds {
        self.thresholds
    }

    pub fn evaluate(
        &self,
        target: &TargetSentence,
        recognition: &RecognitionResult,
    ) -> Result<Evaluation, EvaluationError> {
        let target_words = tokenize(&target.text);
        if target_words.is_empty() {
            return Err(EvaluationError::DegenerateTarget(target.text.clone()));
        }

        let pools = CandidatePools::from_recognition(recognition);
        log::debug!(
            "Evaluating {:?} against {:?} (+{} alternative tokens, confidence {:.2})",
            target_words,
            pools.primary,
            pools.alternatives.len(),
            recognition.confidence
        );

        let judgments = self.matcher.judge_all(&target_words, &pools);
        let correct = judgments.iter().filter(|j| j.is_correct()).count();
        let score = score(correct, target_words.len())?;
        let wrong_words = judgments
            .iter()
            .filter(|j| !j.is_correct())
            .map(|j| j.word.clone())
            .collect();

        Ok(Evaluation {
            judgments,
            outcome: EvaluationOutcome {
                score,
                heard_text: recognition.primary_transcript.clone(),
                target_text: target.text.clone(),
                wrong_words,
            },
            band: self.thresholds.classify(score),
            confidence: recognition.confidence,
        })
    }
}
