use utsushi_types::ProgressEvent;

/// Marker appended once every file in the batch has been attempted.
pub const COMPLETION_MARKER: &str = "--- all files processed ---\n";

/// Header line emitted before each file's result block.
pub fn header_line(index: usize, total: usize, filename: &str) -> String {
    format!("--- [{index}/{total}] {filename} ---\n")
}

/// Recognized text block, with its trailing separator.
pub fn success_block(text: &str) -> String {
    format!("{text}\n\n")
}

/// Per-file error block, with its trailing separator.
pub fn failure_block(message: &str) -> String {
    format!("OCR failed: {message}\n\n")
}

/// The accumulated transcription text, appended once per progress event
/// and only ever from the UI context.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn apply(&mut self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Header {
                index,
                total,
                filename,
            } => self.text.push_str(&header_line(*index, *total, filename)),
            // Success/Failure payloads already carry their separators.
            ProgressEvent::Success { text } => self.text.push_str(text),
            ProgressEvent::Failure { message } => self.text.push_str(message),
            ProgressEvent::BatchComplete => self.text.push_str(COMPLETION_MARKER),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// True when nothing but whitespace has accumulated.
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}
