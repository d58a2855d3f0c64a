//! Secret word representation
//!
//! A `SecretWord` stores the uppercase word along with letter position indices,
//! so revealing a guessed letter is a single lookup.

use rustc_hash::FxHashMap;
use std::fmt;

use super::Letter;

/// The word the player is trying to guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<Letter>,
    positions: FxHashMap<Letter, Vec<usize>>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word '{0}' must contain only letters A-Z")]
    InvalidCharacters(String),
}

impl SecretWord {
    /// Create a secret word, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other than
    /// ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("python").unwrap();
    /// assert_eq!(word.text(), "PYTHON");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("c3po").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = text
            .chars()
            .map(Letter::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| WordError::InvalidCharacters(text.clone()))?;

        let mut positions: FxHashMap<Letter, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
            letters,
            positions,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of positions (letters) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.positions.contains_key(&letter)
    }

    /// All positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
