//! Puzzle word representation
//!
//! A Word stores a fixed-length lowercase letter sequence together with a
//! letter bitmask used for fast membership and disjointness tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Longest word the solver accepts
///
/// Bounded so feedback codes fit a `u32` and per-letter position sets fit a bitmask.
pub const MAX_WORD_LENGTH: usize = 16;

/// A puzzle word with letter-set tracking
///
/// Ordering and equality follow the text, so sorted collections of words are stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    mask: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must be at most {MAX_WORD_LENGTH} letters, got {0}")]
    TooLong(usize),
    #[error("Word must be exactly {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("Word must contain only ASCII letters")]
    InvalidCharacters,
}

/// Bit for a lowercase ASCII letter
#[inline]
#[must_use]
pub const fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

impl Word {
    /// Create a new Word from a string, normalizing case
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, longer than [`MAX_WORD_LENGTH`],
    /// or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_openings::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }
        if text.len() > MAX_WORD_LENGTH {
            return Err(WordError::TooLong(text.len()));
        }

        let mask = text.bytes().fold(0, |mask, b| mask | letter_bit(b));

        Ok(Self { text, mask })
    }

    /// Create a new Word and require an exact length
    ///
    /// # Errors
    /// Same as [`Word::new`], plus `WordError::WrongLength`.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(WordError::WrongLength {
                expected: length,
                actual: word.len(),
            })
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Get the letter at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; words are validated non-empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Bitmask of the distinct letters in the word (bit 0 = 'a')
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.mask & letter_bit(letter) != 0
    }

    /// True if some letter occurs more than once
    #[inline]
    #[must_use]
    pub fn has_repeated_letters(&self) -> bool {
        self.mask.count_ones() as usize != self.len()
    }

    /// True if the two words have at least one letter in common
    #[inline]
    #[must_use]
    pub const fn shares_letters(&self, other: &Self) -> bool {
        self.mask & other.mask != 0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<Self> for Word {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
