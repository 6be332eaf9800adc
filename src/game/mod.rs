//! Game session state machine

mod session;

pub use session::{GameSession, SessionError, SessionState, SubmitOutcome};
