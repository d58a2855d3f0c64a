//! Text rendering for the game screen
//!
//! Every function here is a pure function of game state and theme.
//! Writing the result to the terminal is the caller's job.

use super::gallows::gallows_stage;
use super::theme::{ColorRole, Theme};
use crate::commands::SessionSummary;
use crate::core::{GameState, LetterSet, Revealed, SecretWord};

/// Placeholder shown for letters not yet guessed
pub const PLACEHOLDER: char = '_';

const TITLE: &str = r"
  _    _
 | |  | |
 | |__| | __ _ _ __   __ _ _ __ ___   __ _ _ __
 |  __  |/ _` | '_ \ / _` | '_ ` _ \ / _` | '_ \
 | |  | | (_| | | | | (_| | | | | | | (_| | | | |
 |_|  |_|\__,_|_| |_|\__, |_| |_| |_|\__,_|_| |_|
                      __/ |
                     |___/
";

/// Title banner with tagline
#[must_use]
pub fn title_banner(theme: &Theme) -> String {
    format!(
        "{}\n{}guess the word, one letter at a time\n",
        theme.paint(ColorRole::Title, TITLE),
        " ".repeat(12)
    )
}

/// Revealed pattern with placeholders, letters separated by single spaces
///
/// Revealed letters are painted in the correct-guess color.
#[must_use]
pub fn word_progress(revealed: &Revealed, theme: &Theme) -> String {
    revealed
        .positions()
        .iter()
        .map(|slot| match slot {
            Some(letter) => theme.paint(ColorRole::Correct, &letter.to_string()),
            None => PLACEHOLDER.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guessed letters in alphabetical order, hits and misses colored apart
///
/// An empty set renders as an empty string.
#[must_use]
pub fn guessed_letters_summary(guessed: LetterSet, secret: &SecretWord, theme: &Theme) -> String {
    guessed
        .iter()
        .map(|letter| {
            let role = if secret.has_letter(letter) {
                ColorRole::Correct
            } else {
                ColorRole::Wrong
            };
            theme.paint(role, &letter.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Guessed letters: ...` line, or `None` before the first guess
#[must_use]
pub fn guessed_letters_line(state: &GameState, theme: &Theme) -> Option<String> {
    if state.guessed().is_empty() {
        return None;
    }
    Some(format!(
        "Guessed letters: {}",
        guessed_letters_summary(state.guessed(), state.secret(), theme)
    ))
}

/// Full screen shown before each guess: separator, gallows, progress, guesses
#[must_use]
pub fn round_screen(state: &GameState, theme: &Theme) -> String {
    let mut screen = format!(
        "\n{}\n{}\n\nWord: {}\n",
        "=".repeat(50),
        gallows_stage(state.incorrect_guesses()),
        word_progress(&state.revealed(), theme)
    );
    if let Some(line) = guessed_letters_line(state, theme) {
        screen.push('\n');
        screen.push_str(&line);
        screen.push('\n');
    }
    screen
}

#[must_use]
pub fn win_message(secret: &SecretWord, theme: &Theme) -> String {
    theme.paint(
        ColorRole::Correct,
        &format!("Congratulations! You guessed the word: {secret}"),
    )
}

/// Final gallows frame followed by the reveal of the secret word
#[must_use]
pub fn loss_message(state: &GameState, theme: &Theme) -> String {
    format!(
        "{}\n\n{}",
        gallows_stage(state.incorrect_guesses()),
        theme.paint(
            ColorRole::Wrong,
            &format!("Game Over! The word was: {}", state.secret())
        )
    )
}

#[must_use]
pub fn farewell(summary: &SessionSummary, theme: &Theme) -> String {
    format!(
        "{}\n{}",
        theme.paint(ColorRole::Title, "Thanks for playing! Goodbye!"),
        summary
    )
}

#[must_use]
pub fn interrupted_farewell() -> &'static str {
    "Game interrupted. Thanks for playing!"
}
