use serde::{Deserialize, Serialize};

/// One unit of progress flowing from the batch worker to the UI.
///
/// A `Header` is always immediately followed by exactly one `Success` or
/// `Failure` for the same file. `BatchComplete` is terminal and emitted
/// exactly once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressEvent {
    Header {
        /// 1-based position within the batch.
        index: usize,
        total: usize,
        filename: String,
    },
    Success {
        text: String,
    },
    Failure {
        message: String,
    },
    BatchComplete,
}

impl ProgressEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProgressEvent::BatchComplete)
    }
}
