use std::path::PathBuf;

use utsushi_core::DEFAULT_SAVE_NAME;

/// Raster formats offered by the file picker.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tiff"];

/// Native dialog collaborators. Kept behind a trait so the session flow
/// can be driven without real dialog windows.
pub trait Dialogs {
    /// Multi-file image picker. Empty result means cancelled.
    fn pick_images(&self) -> Vec<PathBuf>;

    /// Save destination picker. `None` means cancelled.
    fn pick_save_target(&self) -> Option<PathBuf>;

    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_images(&self) -> Vec<PathBuf> {
        rfd::FileDialog::new()
            .add_filter("Image files", IMAGE_EXTENSIONS)
            .pick_files()
            .unwrap_or_default()
    }

    fn pick_save_target(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Save transcription")
            .set_file_name(DEFAULT_SAVE_NAME)
            .add_filter("Text files", &["txt"])
            .save_file()
    }

    fn info(&self, message: &str) {
        message_box(rfd::MessageLevel::Info, "Success", message);
    }

    fn warn(&self, message: &str) {
        message_box(rfd::MessageLevel::Warning, "Warning", message);
    }

    fn error(&self, message: &str) {
        message_box(rfd::MessageLevel::Error, "Error", message);
    }
}

fn message_box(level: rfd::MessageLevel, title: &str, message: &str) {
    rfd::MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .show();
}
