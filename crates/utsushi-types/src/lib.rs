pub mod types;

pub use types::ProgressEvent;
