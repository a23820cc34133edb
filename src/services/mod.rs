pub mod context;
pub mod server;
pub mod submission;

pub use context::{AppContext, RoundStatus, Session, local_now};
pub use submission::SubmissionOutcome;
