use std::panic::{AssertUnwindSafe, catch_unwind};

use kanal::{Receiver, Sender};
use utsushi_core::batch::{InputBatch, display_name};
use utsushi_core::transcript::{failure_block, success_block};
use utsushi_types::ProgressEvent;

use crate::engine::Recognizer;

/// Process the batch strictly in order, one file at a time. Each file
/// yields a `Header` immediately followed by `Success` or `Failure`; a
/// failing file never aborts the run. Returns early only when the
/// consumer side of the channel is gone.
fn process_files(batch: &InputBatch, engine: &dyn Recognizer, tx: &Sender<ProgressEvent>) {
    let total = batch.len();
    for (i, path) in batch.paths().iter().enumerate() {
        let header = ProgressEvent::Header {
            index: i + 1,
            total,
            filename: display_name(path),
        };
        if tx.send(header).is_err() {
            return;
        }

        let event = match engine.recognize_file(path) {
            Ok(text) => ProgressEvent::Success {
                text: success_block(&text),
            },
            Err(e) => {
                tracing::warn!(image = %path.display(), "recognition failed: {e}");
                ProgressEvent::Failure {
                    message: failure_block(&e.to_string()),
                }
            }
        };
        if tx.send(event).is_err() {
            return;
        }
    }
}

/// Run one batch to completion. `BatchComplete` is emitted exactly once,
/// even when the worker faults outside the per-file boundary; in that
/// case a single synthetic `Failure` covers the remainder of the batch.
pub fn run_batch(batch: &InputBatch, engine: &dyn Recognizer, tx: &Sender<ProgressEvent>) {
    let outcome = catch_unwind(AssertUnwindSafe(|| process_files(batch, engine, tx)));
    if let Err(panic) = outcome {
        let detail = panic
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown worker fault".to_string());
        tracing::error!("batch worker fault: {detail}");
        let _ = tx.send(ProgressEvent::Failure {
            message: failure_block(&format!(
                "unexpected error, remaining files skipped: {detail}"
            )),
        });
    }
    let _ = tx.send(ProgressEvent::BatchComplete);
}

/// Dispatch a batch run on the blocking pool and hand back the consumer
/// side of the progress channel. The UI polls it with `try_recv` until
/// it observes `BatchComplete`; the worker terminates on its own, so
/// dropping the receiver early just abandons the run.
pub fn spawn_batch<R>(engine: R, batch: InputBatch) -> Receiver<ProgressEvent>
where
    R: Recognizer + 'static,
{
    let (tx, rx) = kanal::unbounded();
    tokio::task::spawn_blocking(move || run_batch(&batch, &engine, &tx));
    rx
}
