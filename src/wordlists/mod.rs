//! Word lists for Hangman
//!
//! Provides the embedded word list and the `WordBank` that draws secret words from it.

mod bank;
mod embedded;

pub use bank::WordBank;
pub use embedded::{WORDS, WORDS_COUNT};
