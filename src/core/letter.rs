//! Guessable letters
//!
//! A `Letter` is a single uppercase ASCII letter (A-Z). A `LetterSet` stores any
//! subset of the 26 letters as a bitmask, so iteration is always alphabetical.

use std::fmt;

use super::GameError;

/// A single uppercase letter A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `GameError::InvalidLetter` if `ch` is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// let letter = Letter::new('q').unwrap();
    /// assert_eq!(letter.as_char(), 'Q');
    ///
    /// assert!(Letter::new('5').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self, GameError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_uppercase() as u8))
        } else {
            Err(GameError::InvalidLetter(ch))
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based alphabet index (A = 0, Z = 25)
    #[inline]
    const fn index(self) -> u32 {
        (self.0 - b'A') as u32
    }
}

impl TryFrom<char> for Letter {
    type Error = GameError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Set of letters, iterated in alphabetical order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    /// Add a letter, returning `false` if it was already present
    pub const fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1 << letter.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        (0..26u8)
            .filter(move |i| self.0 & (1 << i) != 0)
            .map(|i| Letter(b'A' + i))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}
