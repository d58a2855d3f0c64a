//! Game configuration and startup validation

use std::time::Duration;

use crate::core::{MAX_ATTEMPTS, WordError};
use crate::output::gallows;

/// Fatal problems detected before any round starts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("word bank is empty")]
    EmptyWordBank,
    #[error("invalid word in word bank: {0}")]
    InvalidWord(#[source] WordError),
    #[error("{frames} gallows frames do not fit {max_attempts} attempts (need {})",
        .max_attempts + 1)]
    FrameCountMismatch { frames: usize, max_attempts: usize },
}

/// Settings for a play session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: u8,
    /// Pause between intro lines; disable for non-interactive runs
    pub enable_intro_delay: bool,
    pub intro_delay: Duration,
    pub color: bool,
    /// Seed for word selection; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            enable_intro_delay: true,
            intro_delay: Duration::from_secs(1),
            color: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Configuration for automated runs: no pauses, no color
    #[must_use]
    pub fn headless() -> Self {
        Self {
            enable_intro_delay: false,
            color: false,
            ..Self::default()
        }
    }

    /// Check the attempt budget against the gallows art
    ///
    /// Word bank problems are caught earlier, when `WordBank::new` builds the bank.
    ///
    /// # Errors
    /// Returns `ConfigError::FrameCountMismatch` when there is not exactly one
    /// gallows frame per attempt plus the empty frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        gallows::check_frames(usize::from(self.max_attempts))
    }
}
