use std::path::PathBuf;

use thiserror::Error;
use utsushi_types::ProgressEvent;

use crate::batch::InputBatch;
use crate::transcript::Transcript;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no image files selected")]
    NothingSelected,
    #[error("a transcription run is already in progress")]
    RunInProgress,
}

/// Where the session currently is in the select -> run -> save cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing selected (or the last selection was cancelled).
    #[default]
    Idle,
    /// A non-empty batch is selected and a run may start.
    Selected,
    /// A batch run is in flight; select/run/save are all rejected.
    Running,
    /// The last run finished; save is available when there is content.
    Completed,
}

/// The select -> run -> save state machine, owned by the UI context.
///
/// The background worker never touches this directly; it only feeds
/// progress events back through the channel, which the UI applies here.
/// The session is reusable indefinitely across selection/run/save cycles.
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    batch: InputBatch,
    transcript: Transcript,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Replace the batch with a fresh selection. An empty selection
    /// (dialog cancelled) drops back to `Idle`. Ignored while a run is
    /// in flight; the select control is disabled then anyway.
    pub fn select(&mut self, paths: Vec<PathBuf>) {
        if self.phase() == Phase::Running {
            return;
        }
        if paths.is_empty() {
            self.batch = InputBatch::default();
            self.phase = Phase::Idle;
        } else {
            self.batch = InputBatch::from_selection(paths);
            self.transcript.clear();
            self.phase = Phase::Selected;
        }
    }

    /// Move to `Running` and hand back the batch for the worker.
    pub fn begin_run(&mut self) -> Result<InputBatch, SessionError> {
        if self.phase() == Phase::Running {
            return Err(SessionError::RunInProgress);
        }
        if self.batch.is_empty() {
            return Err(SessionError::NothingSelected);
        }
        self.transcript.clear();
        self.phase = Phase::Running;
        Ok(self.batch.clone())
    }

    /// Apply one popped progress event: append to the transcript and,
    /// on the terminal event, move to `Completed`.
    pub fn apply(&mut self, event: &ProgressEvent) {
        self.transcript.apply(event);
        if event.is_terminal() {
            self.phase = Phase::Completed;
        }
    }

    pub fn can_select(&self) -> bool {
        self.phase() != Phase::Running
    }

    pub fn can_run(&self) -> bool {
        self.phase() != Phase::Running && !self.batch.is_empty()
    }

    pub fn can_save(&self) -> bool {
        self.phase() == Phase::Completed && !self.transcript.is_blank()
    }

    pub fn status_label(&self) -> String {
        if self.batch.is_empty() {
            "No files selected".to_string()
        } else {
            format!("{} files selected", self.batch.len())
        }
    }

    pub fn batch(&self) -> &InputBatch {
        &self.batch
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
