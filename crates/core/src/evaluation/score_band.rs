use std::fmt;

use crate::shared::constants::{DEFAULT_ALMOST_THRESHOLD, DEFAULT_GREAT_THRESHOLD};

/// Qualitative tier shown next to the numeric score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Great,
    Almost,
    KeepTrying,
}

impl ScoreBand {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Great => "Great!",
            ScoreBand::Almost => "Almost!",
            ScoreBand::KeepTrying => "Keep trying!",
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            ScoreBand::Great => "Clear, easy-to-understand pronunciation!",
            ScoreBand::Almost => "Nearly there! Focus on the words marked in red.",
            ScoreBand::KeepTrying => "Listen to the model sentence, then try again!",
        }
    }

    /// Style class for the score badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Great => "high",
            ScoreBand::Almost => "mid",
            ScoreBand::KeepTrying => "low",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lower bounds (inclusive) of the Great and Almost bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandThresholds {
    pub great: u8,
    pub almost: u8,
}

impl BandThresholds {
    pub fn classify(&self, score: u8) -> ScoreBand {
        if score >= self.great {
            ScoreBand::Great
        } else if score >= self.almost {
            ScoreBand::Almost
        } else {
            ScoreBand::KeepTrying
        }
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            great: DEFAULT_GREAT_THRESHOLD,
            almost: DEFAULT_ALMOST_THRESHOLD,
        }
    }
}
