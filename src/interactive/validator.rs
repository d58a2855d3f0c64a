//! Player input validation
//!
//! Raw lines are turned into a guess letter or a yes/no answer. Invalid input is
//! answered with a warning and a fresh prompt, for as long as it takes.

use std::io::Write;

use super::console::Console;
use super::lines::{InputError, LineSource};
use crate::core::{GameState, Letter, LetterSet};
use crate::output::ColorRole;
use crate::output::display::guessed_letters_line;

pub const GUESS_PROMPT: &str = "Guess a letter: ";
pub const REPLAY_PROMPT: &str = "Would you like to play again? (Y/N): ";

/// Why a guess was rejected; checked in declaration order
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Please enter a single letter.")]
    NotSingleLetter,
    #[error("Please enter a valid letter (A-Z).")]
    NotAlphabetic,
    #[error("You've already guessed that letter!")]
    AlreadyGuessed(Letter),
}

/// Parse a raw line into a fresh guess
///
/// The line is uppercased and then checked as-is, so stray spaces make it
/// more than one character.
///
/// # Errors
/// The first failing rule, in order: not exactly one character, not a letter
/// A-Z, already guessed.
///
/// # Examples
/// ```
/// use hangman::core::LetterSet;
/// use hangman::interactive::{Rejection, parse_guess};
///
/// let letter = parse_guess("e", LetterSet::new()).unwrap();
/// assert_eq!(letter.as_char(), 'E');
///
/// assert_eq!(parse_guess("AB", LetterSet::new()), Err(Rejection::NotSingleLetter));
/// assert_eq!(parse_guess(" a", LetterSet::new()), Err(Rejection::NotSingleLetter));
/// assert_eq!(parse_guess("5", LetterSet::new()), Err(Rejection::NotAlphabetic));
/// ```
pub fn parse_guess(raw: &str, already_guessed: LetterSet) -> Result<Letter, Rejection> {
    let normalized = raw.to_uppercase();
    let mut chars = normalized.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(Rejection::NotSingleLetter);
    };

    let letter = Letter::new(ch).map_err(|_| Rejection::NotAlphabetic)?;

    if already_guessed.contains(letter) {
        return Err(Rejection::AlreadyGuessed(letter));
    }
    Ok(letter)
}

/// Prompt until the player enters a letter not yet guessed this round
///
/// A repeated letter also re-displays the guessed-letters summary.
///
/// # Errors
/// Only input failures (interrupt, end of input, I/O) escape; rejections are
/// handled here.
pub fn read_guess<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    state: &GameState,
) -> Result<Letter, InputError> {
    loop {
        let raw = console.prompt(GUESS_PROMPT)?;
        match parse_guess(&raw, state.guessed()) {
            Ok(letter) => return Ok(letter),
            Err(rejection) => {
                log::debug!("rejected guess {raw:?}: {rejection:?}");
                console.say_as(ColorRole::Warning, &rejection.to_string())?;
                if matches!(rejection, Rejection::AlreadyGuessed(_))
                    && let Some(line) = guessed_letters_line(state, console.theme())
                {
                    console.say(format!("{line}\n"))?;
                }
            }
        }
    }
}

/// `Some(true)` for Y, `Some(false)` for N (any case), `None` otherwise
#[must_use]
pub fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.to_uppercase().as_str() {
        "Y" => Some(true),
        "N" => Some(false),
        _ => None,
    }
}

/// Ask whether to play another round, re-prompting until Y or N
///
/// # Errors
/// Only input failures escape.
pub fn play_again<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
) -> Result<bool, InputError> {
    loop {
        let raw = console.prompt(REPLAY_PROMPT)?;
        if let Some(answer) = parse_yes_no(&raw) {
            return Ok(answer);
        }
        console.say_as(ColorRole::Warning, "Please enter 'Y' or 'N'.")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;
    use crate::interactive::ScriptedLines;
    use crate::output::Theme;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn console(lines: &[&str]) -> Console<ScriptedLines, Vec<u8>> {
        Console::new(ScriptedLines::new(lines.iter().copied()), Vec::new(), Theme::plain())
    }

    fn output(console: Console<ScriptedLines, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn parse_guess_normalizes() {
        assert_eq!(parse_guess("q", LetterSet::new()), Ok(letter('Q')));
        assert_eq!(parse_guess("Q", LetterSet::new()), Ok(letter('Q')));
    }

    #[test]
    fn parse_guess_counts_whitespace() {
        assert_eq!(parse_guess(" a", LetterSet::new()), Err(Rejection::NotSingleLetter));
        assert_eq!(parse_guess("a ", LetterSet::new()), Err(Rejection::NotSingleLetter));
        assert_eq!(parse_guess(" ", LetterSet::new()), Err(Rejection::NotAlphabetic));
    }

    #[test]
    fn parse_guess_uppercases_before_counting() {
        // "ß" uppercases to "SS"
        assert_eq!(parse_guess("ß", LetterSet::new()), Err(Rejection::NotSingleLetter));
    }

    #[test]
    fn parse_guess_rule_order() {
        let guessed: LetterSet = [letter('A')].into_iter().collect();
        assert_eq!(parse_guess("", guessed), Err(Rejection::NotSingleLetter));
        assert_eq!(parse_guess("AB", guessed), Err(Rejection::NotSingleLetter));
        assert_eq!(parse_guess("55", guessed), Err(Rejection::NotSingleLetter));
        assert_eq!(parse_guess("5", guessed), Err(Rejection::NotAlphabetic));
        assert_eq!(parse_guess("ü", guessed), Err(Rejection::NotAlphabetic));
        assert_eq!(
            parse_guess("a", guessed),
            Err(Rejection::AlreadyGuessed(letter('A')))
        );
    }

    #[test]
    fn read_guess_reprompts_until_valid() {
        let state = GameState::new(SecretWord::new("SYNTAX").unwrap());
        let mut console = console(&["AB", "5", "s"]);

        assert_eq!(read_guess(&mut console, &state).unwrap(), letter('S'));

        let out = output(console);
        assert_eq!(out.matches(GUESS_PROMPT).count(), 3);
        assert!(out.contains("Please enter a single letter."));
        assert!(out.contains("Please enter a valid letter (A-Z)."));
    }

    #[test]
    fn read_guess_repeat_shows_summary() {
        let mut state = GameState::new(SecretWord::new("SYNTAX").unwrap());
        state.apply_guess(letter('A')).unwrap();
        state.apply_guess(letter('E')).unwrap();
        let mut console = console(&["e", "t"]);

        assert_eq!(read_guess(&mut console, &state).unwrap(), letter('T'));
        assert_eq!(state.incorrect_guesses(), 1);

        let out = output(console);
        assert!(out.contains("You've already guessed that letter!"));
        assert!(out.contains("Guessed letters: A E"));
    }

    #[test]
    fn read_guess_propagates_interrupt() {
        let state = GameState::new(SecretWord::new("SYNTAX").unwrap());
        let mut console = Console::new(
            ScriptedLines::new(["??"]).then_interrupt(),
            Vec::new(),
            Theme::plain(),
        );
        assert!(matches!(
            read_guess(&mut console, &state),
            Err(InputError::Interrupted)
        ));
    }

    #[test]
    fn yes_no_parsing() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no(" n "), None);
        assert_eq!(parse_yes_no("yes"), None);
        assert_eq!(parse_yes_no(""), None);
    }

    #[test]
    fn play_again_reprompts() {
        let mut console = console(&["maybe", "", "N"]);
        assert!(!play_again(&mut console).unwrap());

        let out = output(console);
        assert_eq!(out.matches(REPLAY_PROMPT).count(), 3);
        assert_eq!(out.matches("Please enter 'Y' or 'N'.").count(), 2);
    }
}
