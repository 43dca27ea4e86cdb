use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("tesseract not found (install tesseract-ocr or set UTSUSHI_TESSERACT_CMD)")]
    EngineNotFound,
    #[error("tesseract failed: {0}")]
    EngineFailed(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// External OCR capability: image file in, recognized text out.
pub trait Recognizer: Send + Sync {
    fn recognize_file(&self, path: &Path) -> Result<String, OcrError>;
}

impl<F> Recognizer for F
where
    F: Fn(&Path) -> Result<String, OcrError> + Send + Sync,
{
    fn recognize_file(&self, path: &Path) -> Result<String, OcrError> {
        self(path)
    }
}

/// Tesseract OCR via the command line.
pub struct TesseractEngine {
    command: PathBuf,
    language: String,
}

impl TesseractEngine {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            command: PathBuf::from("tesseract"),
            language: language.into(),
        }
    }

    /// Use an explicit executable path instead of the default search path.
    pub fn with_command(mut self, command: impl Into<PathBuf>) -> Self {
        self.command = command.into();
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Recognizer for TesseractEngine {
    fn recognize_file(&self, path: &Path) -> Result<String, OcrError> {
        // Validate the image up front; unreadable or corrupt input is a
        // per-file decode error rather than an engine failure.
        image::open(path)?;

        tracing::debug!(image = %path.display(), lang = %self.language, "running tesseract");
        let output = Command::new(&self.command)
            .arg(path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output();

        match output {
            Ok(output) if output.status.success() => {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(OcrError::EngineFailed(stderr.trim().to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(OcrError::EngineNotFound),
            Err(e) => Err(OcrError::Io(e)),
        }
    }
}
