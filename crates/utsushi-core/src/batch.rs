use std::path::{Path, PathBuf};

/// The ordered set of image files for one transcription run.
///
/// Paths are sorted ascending by file name (not full path) at
/// construction and never mutated afterwards; a new selection replaces
/// the batch wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBatch {
    paths: Vec<PathBuf>,
}

impl InputBatch {
    pub fn from_selection(mut paths: Vec<PathBuf>) -> Self {
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

/// File name shown in progress headers. Falls back to the full path for
/// paths without a final component.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
