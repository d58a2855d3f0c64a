//! Hangman
//!
//! A console word-guessing game: propose letters, reveal the secret word, and
//! finish it before the gallows drawing is complete.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, Letter, Outcome, SecretWord};
//!
//! let mut game = GameState::new(SecretWord::new("rust").unwrap());
//! for ch in "RUST".chars() {
//!     game.apply_guess(Letter::new(ch).unwrap()).unwrap();
//! }
//! assert_eq!(game.outcome(), Outcome::Won);
//! println!("Revealed: {}", game.revealed());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Settings and startup checks
pub mod config;

// Round and session drivers
pub mod commands;

// Terminal output formatting
pub mod output;

// Console input
pub mod interactive;
