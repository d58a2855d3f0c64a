//! Interactive console input
//!
//! Line sources, the `Console` that pairs them with an output sink, and the
//! validation loops that turn raw lines into guesses and replay answers.

mod console;
pub mod interrupt;
mod lines;
mod validator;

pub use console::Console;
pub use lines::{InputError, LineSource, ReaderLines, ScriptEnd, ScriptedLines, TerminalLines};
pub use validator::{
    GUESS_PROMPT, REPLAY_PROMPT, Rejection, parse_guess, parse_yes_no, play_again, read_guess,
};
