//! Word bank
//!
//! Immutable set of candidate secret words, one of which is drawn per round.

use rand::Rng;
use rand::prelude::IndexedRandom;

use super::WORDS;
use crate::config::ConfigError;
use crate::core::SecretWord;

/// Non-empty list of validated candidate words
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<SecretWord>,
}

impl WordBank {
    /// Build a bank from raw words
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordBank` if `words` is empty and
    /// `ConfigError::InvalidWord` for the first word that is not purely A-Z.
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::WordBank;
    ///
    /// let bank = WordBank::new(["rust", "cargo"]).unwrap();
    /// assert_eq!(bank.len(), 2);
    ///
    /// assert!(WordBank::new(Vec::<&str>::new()).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| SecretWord::new(word.as_ref()).map_err(ConfigError::InvalidWord))
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(ConfigError::EmptyWordBank);
        }

        Ok(Self { words })
    }

    /// Bank over the embedded word list
    ///
    /// # Errors
    /// Only fails if the embedded list itself is broken.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::new(WORDS)
    }

    /// Pick a word uniformly at random using the thread-local RNG
    #[must_use]
    pub fn pick_word(&self) -> SecretWord {
        self.pick_word_with(&mut rand::rng())
    }

    /// Pick a word uniformly at random using the given RNG
    #[must_use]
    pub fn pick_word_with<R: Rng + ?Sized>(&self, rng: &mut R) -> SecretWord {
        // Construction guarantees at least one word
        self.words
            .choose(rng)
            .unwrap_or(&self.words[0])
            .clone()
    }

    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: construction rejects empty banks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
