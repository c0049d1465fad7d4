/// BCP 47 tag used for both recognition and synthesis.
pub const LANGUAGE_TAG: &str = "en-AU";

/// Number of target sentences in every lesson's pronunciation section.
pub const SENTENCE_COUNT: usize = 5;

/// Recognition alternatives requested per attempt.
pub const MAX_ALTERNATIVES: usize = 3;

/// Default playback rate for lesson audio and the model sentence.
pub const DEFAULT_SPEECH_RATE: f32 = 0.85;
pub const MODEL_SENTENCE_RATE: f32 = 0.85;

/// A target word counts as heard if some candidate is within this many edits.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 1;

/// Score bands: `>= GREAT` is Great, `>= ALMOST` is Almost, anything lower is Keep trying.
pub const DEFAULT_GREAT_THRESHOLD: u8 = 80;
pub const DEFAULT_ALMOST_THRESHOLD: u8 = 50;

pub const SETTINGS_DIR_NAME: &str = "Cooking English";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
