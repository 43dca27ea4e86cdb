pub mod batch;
pub mod save;
pub mod session;
pub mod transcript;

pub use batch::InputBatch;
pub use save::{DEFAULT_SAVE_NAME, SaveError, save_transcript};
pub use session::{Phase, Session, SessionError};
pub use transcript::Transcript;
