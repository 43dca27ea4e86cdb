//! End-to-end select -> run -> poll -> save cycles, driven the way the
//! UI drives them but with a scripted recognizer instead of tesseract.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::time::timeout;
use utsushi_core::batch::display_name;
use utsushi_core::{DEFAULT_SAVE_NAME, Phase, SaveError, Session, save_transcript};
use utsushi_ocr::{OcrError, spawn_batch};
use utsushi_types::ProgressEvent;

/// Drive one full run: dispatch the worker and apply events to the
/// session in channel order until the terminal event.
async fn drive_run<R>(session: &mut Session, engine: R)
where
    R: utsushi_ocr::Recognizer + 'static,
{
    let batch = session.begin_run().expect("run should start");
    let rx = spawn_batch(engine, batch).to_async();

    timeout(Duration::from_secs(2), async {
        loop {
            let event = rx.recv().await.expect("recv failed");
            let done = event.is_terminal();
            session.apply(&event);
            if done {
                break;
            }
        }
    })
    .await
    .expect("timeout waiting for batch completion");
}

#[tokio::test]
async fn test_full_cycle_select_run_save() {
    let mut session = Session::new();
    session.select(vec![PathBuf::from("b.png"), PathBuf::from("a.png")]);
    assert_eq!(session.status_label(), "2 files selected");

    let engine = |path: &Path| Ok::<_, OcrError>(format!("text of {}", display_name(path)));
    drive_run(&mut session, engine).await;

    assert_eq!(session.phase(), Phase::Completed);
    assert!(session.can_save());

    let transcript = session.transcript().as_str();
    let a_pos = transcript.find("--- [1/2] a.png ---").expect("a header");
    let b_pos = transcript.find("--- [2/2] b.png ---").expect("b header");
    assert!(a_pos < b_pos);
    assert!(transcript.contains("text of a.png"));
    assert!(transcript.ends_with("--- all files processed ---\n"));

    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join(DEFAULT_SAVE_NAME);
    save_transcript(&target, transcript).expect("save");
    assert_eq!(
        fs::read_to_string(&target).expect("read back"),
        transcript.trim()
    );
}

#[tokio::test]
async fn test_failing_file_keeps_ui_unstuck_and_save_enabled() {
    let mut session = Session::new();
    session.select(vec![PathBuf::from("scan.png")]);

    let engine =
        |_: &Path| -> Result<String, OcrError> { Err(OcrError::EngineFailed("disk read error".into())) };
    drive_run(&mut session, engine).await;

    // Controls come back even though every file failed.
    assert_eq!(session.phase(), Phase::Completed);
    assert!(session.can_select());
    assert!(session.can_run());

    let transcript = session.transcript().as_str();
    assert!(transcript.contains("--- [1/1] scan.png ---"));
    assert!(transcript.contains("disk read error"));
    // Error text is content, so saving is allowed.
    assert!(session.can_save());
}

#[tokio::test]
async fn test_second_cycle_replaces_first() {
    let mut session = Session::new();
    session.select(vec![PathBuf::from("one.png")]);
    drive_run(&mut session, |_: &Path| Ok::<_, OcrError>("first".to_string())).await;

    session.select(vec![PathBuf::from("two.png")]);
    assert!(!session.can_save());
    drive_run(&mut session, |_: &Path| Ok::<_, OcrError>("second".to_string())).await;

    let transcript = session.transcript().as_str();
    assert!(transcript.contains("second"));
    assert!(!transcript.contains("first"));
}

#[tokio::test]
async fn test_worker_events_arrive_in_batch_order() {
    let mut session = Session::new();
    session.select(
        ["c.png", "a.png", "b.png"]
            .iter()
            .map(PathBuf::from)
            .collect(),
    );

    let batch = session.begin_run().expect("run");
    let rx = spawn_batch(|_: &Path| Ok::<_, OcrError>("x".to_string()), batch).to_async();

    let mut headers = Vec::new();
    timeout(Duration::from_secs(2), async {
        loop {
            let event = rx.recv().await.expect("recv failed");
            match &event {
                ProgressEvent::Header {
                    index, filename, ..
                } => headers.push((*index, filename.clone())),
                ProgressEvent::BatchComplete => break,
                _ => {}
            }
        }
    })
    .await
    .expect("timeout");

    assert_eq!(
        headers,
        [
            (1, "a.png".to_string()),
            (2, "b.png".to_string()),
            (3, "c.png".to_string()),
        ]
    );
}

#[test]
fn test_save_empty_content_is_rejected_without_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join(DEFAULT_SAVE_NAME);

    let result = save_transcript(&target, "  \n ");
    assert!(matches!(result, Err(SaveError::EmptyContent)));
    assert!(!target.exists());
}
