//! Core domain types for Hangman
//!
//! This module contains the round state machine and the value types it is built on.
//! Nothing here performs I/O; everything is pure and directly testable.

mod game;
mod letter;
mod word;

pub use game::{GameError, GameState, GuessResult, MAX_ATTEMPTS, Outcome, Revealed};
pub use letter::{Letter, LetterSet};
pub use word::{SecretWord, WordError};
