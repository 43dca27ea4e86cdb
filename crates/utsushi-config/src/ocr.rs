use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "jpn+eng".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    /// Language hint passed to the engine (tesseract `-l` syntax).
    #[serde(default = "default_language")]
    pub language: String,
    /// Explicit path to the tesseract executable. `None` means resolve
    /// via the default search path.
    pub command: Option<PathBuf>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            command: None,
        }
    }
}
