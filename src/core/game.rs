//! Round state machine
//!
//! A `GameState` owns everything about one round: the secret word, the letters
//! guessed so far and the number of misses. The revealed pattern is always derived
//! from those, never stored separately.
//!
//! ```text
//!              hit, all revealed
//!   InProgress ─────────────────▶ Won
//!        │
//!        └────────────────────────▶ Lost
//!              miss, misses == max
//! ```
//!
//! Won and Lost are terminal: `apply_guess` refuses to run in either.

use std::fmt;

use super::{Letter, LetterSet, SecretWord};

/// Incorrect guesses allowed before the round is lost
pub const MAX_ATTEMPTS: u8 = 6;

/// Round outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Errors raised by `GameState` when a guess violates its preconditions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("'{0}' is not a letter A-Z")]
    InvalidLetter(char),
    #[error("letter {0} has already been guessed")]
    AlreadyGuessed(Letter),
    #[error("round is already over ({0}); no further guesses are accepted")]
    RoundAlreadyOver(Outcome),
}

/// Positional view of the secret word: `Some(letter)` where guessed, `None` otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revealed(Vec<Option<Letter>>);

impl Revealed {
    #[must_use]
    pub fn positions(&self) -> &[Option<Letter>] {
        &self.0
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }
}

/// Plain rendering: letters and `_` separated by single spaces
impl fmt::Display for Revealed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match slot {
                Some(letter) => write!(f, "{letter}")?,
                None => f.write_str("_")?,
            }
        }
        Ok(())
    }
}

/// What happened when a guess was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub letter: Letter,
    /// Positions newly revealed by this guess (0 on a miss)
    pub revealed_count: usize,
    pub outcome: Outcome,
    pub incorrect_guesses: u8,
    pub pattern: Revealed,
}

impl GuessResult {
    #[inline]
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        self.revealed_count > 0
    }
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct GameState {
    secret: SecretWord,
    guessed: LetterSet,
    incorrect_guesses: u8,
    max_attempts: u8,
    hidden: usize,
    outcome: Outcome,
}

impl GameState {
    /// Start a round with the standard attempt budget
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        Self::with_max_attempts(secret, MAX_ATTEMPTS)
    }

    #[must_use]
    pub fn with_max_attempts(secret: SecretWord, max_attempts: u8) -> Self {
        let hidden = secret.len();
        Self {
            secret,
            guessed: LetterSet::new(),
            incorrect_guesses: 0,
            max_attempts,
            hidden,
            outcome: Outcome::InProgress,
        }
    }

    /// Apply one guessed letter
    ///
    /// # Errors
    /// - `GameError::RoundAlreadyOver` if the round is won or lost
    /// - `GameError::AlreadyGuessed` if the letter was guessed earlier this round
    ///
    /// State is left untouched on error.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, Letter, Outcome, SecretWord};
    ///
    /// let mut game = GameState::new(SecretWord::new("AB").unwrap());
    /// game.apply_guess(Letter::new('a').unwrap()).unwrap();
    /// let result = game.apply_guess(Letter::new('b').unwrap()).unwrap();
    /// assert_eq!(result.outcome, Outcome::Won);
    /// assert!(game.apply_guess(Letter::new('c').unwrap()).is_err());
    /// ```
    pub fn apply_guess(&mut self, letter: Letter) -> Result<GuessResult, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::RoundAlreadyOver(self.outcome));
        }
        if !self.guessed.insert(letter) {
            return Err(GameError::AlreadyGuessed(letter));
        }

        let revealed_count = self.secret.positions_of(letter).len();
        if revealed_count > 0 {
            self.hidden -= revealed_count;
            if self.hidden == 0 {
                self.outcome = Outcome::Won;
            }
        } else {
            self.incorrect_guesses += 1;
            if self.incorrect_guesses >= self.max_attempts {
                self.outcome = Outcome::Lost;
            }
        }

        log::debug!(
            "guess {letter}: {} ({} hidden, {}/{} misses)",
            if revealed_count > 0 { "hit" } else { "miss" },
            self.hidden,
            self.incorrect_guesses,
            self.max_attempts
        );

        Ok(GuessResult {
            letter,
            revealed_count,
            outcome: self.outcome,
            incorrect_guesses: self.incorrect_guesses,
            pattern: self.revealed(),
        })
    }

    /// Current revealed pattern, derived from the secret word and guessed letters
    #[must_use]
    pub fn revealed(&self) -> Revealed {
        Revealed(
            self.secret
                .letters()
                .iter()
                .map(|&letter| self.guessed.contains(letter).then_some(letter))
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn incorrect_guesses(&self) -> u8 {
        self.incorrect_guesses
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }
}
