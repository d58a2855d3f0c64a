//! Embedded word list
//!
//! Words compiled into the binary. All uppercase, all letters A-Z.

/// Candidate secret words
pub const WORDS: &[&str] = &[
    "PYTHON",
    "JAVASCRIPT",
    "HANGMAN",
    "DEVELOPER",
    "PROGRAMMING",
    "KEYBOARD",
    "MONITOR",
    "FUNCTION",
    "VARIABLE",
    "ALGORITHM",
    "SYNTAX",
    "DEBUGGING",
];

/// Number of words in `WORDS`
pub const WORDS_COUNT: usize = WORDS.len();
