//! Terminal output formatting
//!
//! Gallows art, color themes and the text shown during a round.

pub mod display;
pub mod gallows;
pub mod theme;

pub use display::{guessed_letters_summary, round_screen, word_progress};
pub use gallows::{FRAMES, gallows_stage};
pub use theme::{ColorRole, Theme};
