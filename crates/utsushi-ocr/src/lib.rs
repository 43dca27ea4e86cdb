mod engine;
mod runner;

pub use engine::{OcrError, Recognizer, TesseractEngine};
pub use runner::{run_batch, spawn_batch};
