use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use slint::{ComponentHandle, Timer, TimerMode};
use utsushi_config::Config;
use utsushi_core::{Session, SessionError, save_transcript};
use utsushi_ocr::TesseractEngine;

mod dialogs;

pub use dialogs::{Dialogs, IMAGE_EXTENSIONS, NativeDialogs};

slint::include_modules!();

/// Run the UI event loop until the window closes.
///
/// All session state lives on the calling thread; the batch worker only
/// reaches it through the progress channel, drained by a repeating
/// timer on this thread.
pub fn run(config: Config) -> anyhow::Result<()> {
    run_with_dialogs(config, Rc::new(NativeDialogs))
}

pub fn run_with_dialogs(config: Config, dialogs: Rc<dyn Dialogs>) -> anyhow::Result<()> {
    let window = AppWindow::new()?;
    window.window().set_size(slint::PhysicalSize::new(
        config.ui.window_width,
        config.ui.window_height,
    ));

    let session = Rc::new(RefCell::new(Session::new()));
    let poll_timer = Rc::new(Timer::default());
    let poll_interval = Duration::from_millis(config.ui.poll_interval_ms);

    {
        let window_weak = window.as_weak();
        let session = session.clone();
        let dialogs = dialogs.clone();
        window.on_select_images(move || {
            let paths = dialogs.pick_images();
            tracing::debug!("selected {} files", paths.len());
            let session = &mut *session.borrow_mut();
            session.select(paths);
            if let Some(window) = window_weak.upgrade() {
                window.set_transcript(session.transcript().as_str().into());
                sync_controls(&window, session);
            }
        });
    }

    {
        let window_weak = window.as_weak();
        let session_rc = session.clone();
        let dialogs = dialogs.clone();
        let timer = poll_timer.clone();
        let ocr_config = config.ocr.clone();
        window.on_run_transcription(move || {
            let batch = match session_rc.borrow_mut().begin_run() {
                Ok(batch) => batch,
                Err(SessionError::NothingSelected) => {
                    dialogs.warn("Select image files first.");
                    return;
                }
                // The run control is disabled while a batch is in flight.
                Err(SessionError::RunInProgress) => return,
            };
            tracing::info!(files = batch.len(), "starting transcription run");

            let mut engine = TesseractEngine::new(ocr_config.language.clone());
            if let Some(cmd) = &ocr_config.command {
                engine = engine.with_command(cmd);
            }
            let rx = utsushi_ocr::spawn_batch(engine, batch);

            if let Some(window) = window_weak.upgrade() {
                window.set_transcript("".into());
                sync_controls(&window, &session_rc.borrow());
            }

            // Drain the channel on a fixed cadence until the terminal
            // event, then stop rescheduling.
            let window_weak = window_weak.clone();
            let session_rc = session_rc.clone();
            let timer_handle = timer.clone();
            timer.start(TimerMode::Repeated, poll_interval, move || {
                let mut done = false;
                {
                    let mut session = session_rc.borrow_mut();
                    while let Ok(Some(event)) = rx.try_recv() {
                        done = event.is_terminal();
                        session.apply(&event);
                        if done {
                            break;
                        }
                    }
                }
                if let Some(window) = window_weak.upgrade() {
                    let session = session_rc.borrow();
                    window.set_transcript(session.transcript().as_str().into());
                    sync_controls(&window, &session);
                }
                if done {
                    timer_handle.stop();
                }
            });
        });
    }

    {
        let session = session.clone();
        let dialogs = dialogs.clone();
        window.on_save_transcript(move || {
            let session = session.borrow();
            if !session.can_save() {
                dialogs.warn("There is no text to save.");
                return;
            }
            // Cancelled dialog is a silent no-op.
            let Some(path) = dialogs.pick_save_target() else {
                return;
            };
            match save_transcript(&path, session.transcript().as_str()) {
                Ok(()) => dialogs.info(&format!("Saved transcription to {}", path.display())),
                Err(e) => dialogs.error(&format!("Failed to save file: {e}")),
            }
        });
    }

    window.run()?;
    Ok(())
}

fn sync_controls(window: &AppWindow, session: &Session) {
    window.set_status_text(session.status_label().into());
    window.set_select_enabled(session.can_select());
    window.set_run_enabled(session.can_run());
    window.set_save_enabled(session.can_save());
}
