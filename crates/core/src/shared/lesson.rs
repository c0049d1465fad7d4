use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::SENTENCE_COUNT;
use crate::speech::domain::text_normalizer::tokenize;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("failed to read lesson {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid lesson JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("lesson must have exactly {expected} pronunciation sentences, found {found}")]
    SentenceCount { expected: usize, found: usize },
    #[error("pronunciation sentence {index} has no words")]
    EmptySentence { index: usize },
}

/// A phrase the learner reads aloud, with a pronunciation hint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSentence {
    pub text: String,
    pub tip: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub en: String,
    pub ja: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PronunciationSection {
    pub sentences: Vec<TargetSentence>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConversationLine {
    pub speaker: String,
    pub text: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default)]
    pub lines: Vec<ConversationLine>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListeningPart {
    pub full_text: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Listening {
    pub part_a: Option<ListeningPart>,
    pub part_b: Option<ListeningPart>,
}

/// One day's lesson content. Only the pronunciation section is required;
/// the other sections feed the audio segments and vocabulary when present.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LessonContent {
    pub day: u32,
    pub sweet: String,
    #[serde(default)]
    pub emoji: Option<String>,
    pub pronunciation: PronunciationSection,
    #[serde(default)]
    pub recipe: Option<Recipe>,
    #[serde(default)]
    pub review: Option<Review>,
    #[serde(default)]
    pub conversation: Option<Conversation>,
    #[serde(default)]
    pub listening: Option<Listening>,
    #[serde(default)]
    pub recipe_vocab: Vec<VocabEntry>,
    #[serde(default)]
    pub review_vocab: Vec<VocabEntry>,
    #[serde(default)]
    pub conversation_vocab: Vec<VocabEntry>,
}

/// Ids of the lesson passages that can be played aloud.
pub const AUDIO_SEGMENTS: &[&str] = &["recipe", "review", "conversation", "listening-a", "listening-b"];

impl LessonContent {
    pub fn load(path: &Path) -> Result<Self, LessonError> {
        let json = fs::read_to_string(path).map_err(|e| LessonError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, LessonError> {
        let lesson: LessonContent = serde_json::from_str(json)?;
        lesson.validate()?;
        Ok(lesson)
    }

    fn validate(&self) -> Result<(), LessonError> {
        let found = self.pronunciation.sentences.len();
        if found != SENTENCE_COUNT {
            return Err(LessonError::SentenceCount {
                expected: SENTENCE_COUNT,
                found,
            });
        }
        if let Some(index) = self
            .pronunciation
            .sentences
            .iter()
            .position(|s| tokenize(&s.text).is_empty())
        {
            return Err(LessonError::EmptySentence { index });
        }
        Ok(())
    }

    pub fn sentences(&self) -> &[TargetSentence] {
        &self.pronunciation.sentences
    }

    /// Every vocabulary entry in page order: recipe, review, conversation.
    pub fn vocabulary(&self) -> impl Iterator<Item = &VocabEntry> {
        self.recipe_vocab
            .iter()
            .chain(self.review_vocab.iter())
            .chain(self.conversation_vocab.iter())
    }

    pub fn has_vocab(&self, en: &str) -> bool {
        self.vocabulary().any(|v| v.en == en)
    }

    /// Text read aloud for one of [`AUDIO_SEGMENTS`], if the lesson has it.
    pub fn segment_text(&self, segment: &str) -> Option<String> {
        let text = match segment {
            "recipe" => self.recipe.as_ref().map(|r| {
                let steps: Vec<String> = r
                    .steps
                    .iter()
                    .enumerate()
                    .map(|(i, s)| format!("Step {}. {}", i + 1, s.replace("**", "")))
                    .collect();
                format!("{}. {} {}", r.title, r.intro, steps.join(" "))
            }),
            "review" => self.review.as_ref().map(|r| r.text.clone()),
            "conversation" => self.conversation.as_ref().map(|c| {
                c.lines
                    .iter()
                    .map(|l| l.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ... ")
            }),
            "listening-a" => self
                .listening
                .as_ref()
                .and_then(|l| l.part_a.as_ref())
                .map(|p| p.full_text.clone()),
            "listening-b" => self
                .listening
                .as_ref()
                .and_then(|l| l.part_b.as_ref())
                .map(|p| p.full_text.clone()),
            _ => None,
        };
        text.filter(|t| !t.trim().is_empty())
    }
}
