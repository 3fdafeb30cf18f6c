use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "eng";
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Contents of `lang.json`
///
/// Both keys are required; a document missing either one is treated as
/// malformed by the loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Tesseract language code passed via `-l`, e.g. "eng" or "deu"
    pub language: String,
    /// Codec used to decode the text file tesseract writes
    pub encoding: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}
