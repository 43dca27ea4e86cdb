use std::fs;
use std::path::Path;

use thiserror::Error;

/// Suggested file name for the save dialog.
pub const DEFAULT_SAVE_NAME: &str = "transcription.txt";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("there is no text to save")]
    EmptyContent,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Write the transcript to `path`, trimmed of surrounding whitespace and
/// UTF-8 encoded. Whitespace-only content is rejected before any write.
pub fn save_transcript(path: &Path, content: &str) -> Result<(), SaveError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(SaveError::EmptyContent);
    }
    fs::write(path, trimmed)?;
    Ok(())
}
