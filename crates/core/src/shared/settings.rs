use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{
    DEFAULT_ALMOST_THRESHOLD, DEFAULT_GREAT_THRESHOLD, DEFAULT_MAX_EDIT_DISTANCE,
    DEFAULT_SPEECH_RATE, LANGUAGE_TAG, MAX_ALTERNATIVES, MODEL_SENTENCE_RATE, SETTINGS_DIR_NAME,
    SETTINGS_FILE_NAME,
};
use crate::evaluation::score_band::BandThresholds;
use crate::speech::domain::speech_capture::CaptureOptions;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write settings {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Tunable parameters of the pronunciation check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub max_edit_distance: usize,
    pub great_threshold: u8,
    pub almost_threshold: u8,
    pub language_tag: String,
    pub speech_rate: f32,
    pub model_sentence_rate: f32,
    pub max_alternatives: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            great_threshold: DEFAULT_GREAT_THRESHOLD,
            almost_threshold: DEFAULT_ALMOST_THRESHOLD,
            language_tag: LANGUAGE_TAG.to_string(),
            speech_rate: DEFAULT_SPEECH_RATE,
            model_sentence_rate: MODEL_SENTENCE_RATE,
            max_alternatives: MAX_ALTERNATIVES,
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// User settings from the platform config directory, or defaults when
    /// the file is missing or unusable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.great_threshold > 100 {
            return Err(SettingsError::Invalid(format!(
                "great_threshold must be at most 100, got {}",
                self.great_threshold
            )));
        }
        if self.almost_threshold > self.great_threshold {
            return Err(SettingsError::Invalid(format!(
                "almost_threshold ({}) must not exceed great_threshold ({})",
                self.almost_threshold, self.great_threshold
            )));
        }
        for (name, rate) in [
            ("speech_rate", self.speech_rate),
            ("model_sentence_rate", self.model_sentence_rate),
        ] {
            if !(rate > 0.0 && rate <= 10.0) {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be in (0, 10], got {rate}"
                )));
            }
        }
        if !(1..=MAX_ALTERNATIVES).contains(&self.max_alternatives) {
            return Err(SettingsError::Invalid(format!(
                "max_alternatives must be between 1 and {MAX_ALTERNATIVES}, got {}",
                self.max_alternatives
            )));
        }
        if self.language_tag.trim().is_empty() {
            return Err(SettingsError::Invalid("language_tag must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn band_thresholds(&self) -> BandThresholds {
        BandThresholds {
            great: self.great_threshold,
            almost: self.almost_threshold,
        }
    }

    pub fn capture_options(&self) -> CaptureOptions {
        CaptureOptions {
            language_tag: self.language_tag.clone(),
            max_alternatives: self.max_alternatives,
            ..CaptureOptions::default()
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let write_err = |e| SettingsError::Write {
            path: path.to_path_buf(),
            source: e,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(write_err)
    }
}
