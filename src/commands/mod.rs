//! Game drivers
//!
//! `play_round` runs one round; `run_session` runs rounds until the player stops.

pub mod round;
pub mod session;

pub use round::play_round;
pub use session::{SessionSummary, animate_intro, conclude, play_session, run_session};

use crate::core::GameError;
use crate::interactive::InputError;

/// Anything that stops a session early
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("game state rejected a validated guess: {0}")]
    Game(#[from] GameError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl SessionError {
    /// Interrupt or end of input from the player, not a failure
    #[must_use]
    pub const fn is_graceful(&self) -> bool {
        matches!(self, Self::Input(e) if e.is_graceful())
    }
}
