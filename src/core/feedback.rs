//! Guess feedback evaluation and representation
//!
//! Each position of a guess receives one of three symbols:
//! - Absent: the letter does not occur in the solution
//! - Misplaced: the letter occurs in the solution, but elsewhere
//! - Correct: the letter is in the correct position
//!
//! The rule is positional and does not account for repeated letters: a guess
//! letter that occurs anywhere in the solution is Misplaced unless it is Correct,
//! however many times it appears in the guess. Scoring and opening searches are
//! calibrated against this rule.

use super::Word;
use std::fmt;
use thiserror::Error;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeedbackSymbol {
    Absent = 0,
    Misplaced = 1,
    Correct = 2,
}

impl FeedbackSymbol {
    /// Evaluate one position of `guess` against `actual`
    ///
    /// # Panics
    /// Panics if `position` is out of range for either word
    #[inline]
    #[must_use]
    pub fn at(guess: &Word, actual: &Word, position: usize) -> Self {
        let letter = guess.letter_at(position);
        if letter == actual.letter_at(position) {
            Self::Correct
        } else if actual.has_letter(letter) {
            Self::Misplaced
        } else {
            Self::Absent
        }
    }

    /// Numeric weight used by the simple scoring strategy
    #[inline]
    #[must_use]
    pub const fn weight(self) -> u32 {
        self as u32
    }

    const fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Misplaced => '?',
            Self::Absent => 'X',
        }
    }
}

/// Feedback for a whole guess, one symbol per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<FeedbackSymbol>);

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("Feedback must have {expected} symbols, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("Invalid feedback symbol '{0}'")]
    InvalidSymbol(char),
}

impl Feedback {
    /// Calculate the feedback when `guess` is played against `actual`
    ///
    /// Both words must have the same length.
    ///
    /// # Examples
    /// ```
    /// use wordle_openings::core::{Feedback, FeedbackSymbol::*, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let actual = Word::new("allot").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &actual);
    ///
    /// assert_eq!(feedback.symbols(), &[Correct, Absent, Absent, Misplaced, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, actual: &Word) -> Self {
        debug_assert_eq!(guess.len(), actual.len(), "words must have equal length");

        Self(
            (0..guess.len())
                .map(|i| FeedbackSymbol::at(guess, actual, i))
                .collect(),
        )
    }

    /// Base-3 code of the feedback `guess` would receive against `actual`
    ///
    /// Equal codes mean equal feedback; used to partition candidates without
    /// allocating a `Feedback` per pair.
    #[must_use]
    pub fn code(guess: &Word, actual: &Word) -> u32 {
        debug_assert_eq!(guess.len(), actual.len(), "words must have equal length");

        let mut code = 0u32;
        for i in (0..guess.len()).rev() {
            code = code * 3 + FeedbackSymbol::at(guess, actual, i).weight();
        }
        code
    }

    /// Sum of the simple-strategy weights `guess` would get against `actual`
    #[must_use]
    pub fn score_of(guess: &Word, actual: &Word) -> u32 {
        (0..guess.len())
            .map(|i| FeedbackSymbol::at(guess, actual, i).weight())
            .sum()
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[FeedbackSymbol] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of per-position weights (Absent=0, Misplaced=1, Correct=2)
    #[must_use]
    pub fn score(&self) -> u32 {
        self.0.iter().map(|s| s.weight()).sum()
    }

    /// All-Correct feedback for a word of `length` letters
    #[must_use]
    pub fn solved(length: usize) -> Self {
        Self(vec![FeedbackSymbol::Correct; length])
    }

    /// True if every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == FeedbackSymbol::Correct)
    }

    /// Parse feedback typed by a player, e.g. "GX??X" or "🟩⬜🟨🟨⬜"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for Correct
    /// - 'Y'/'y'/'?'/🟨 for Misplaced
    /// - 'X'/'x'/'-'/'_'/⬜ for Absent
    ///
    /// # Errors
    /// Returns `FeedbackParseError` on a length mismatch or an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_openings::core::Feedback;
    ///
    /// let typed = Feedback::parse("gy-GX", 5).unwrap();
    /// assert_eq!(typed.to_string(), "G?XGX");
    /// ```
    pub fn parse(s: &str, length: usize) -> Result<Self, FeedbackParseError> {
        let symbols = s
            .trim()
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Ok(FeedbackSymbol::Correct),
                'Y' | 'y' | '?' | '🟨' => Ok(FeedbackSymbol::Misplaced),
                'X' | 'x' | '-' | '_' | '⬜' => Ok(FeedbackSymbol::Absent),
                other => Err(FeedbackParseError::InvalidSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if symbols.len() != length {
            return Err(FeedbackParseError::WrongLength {
                expected: length,
                actual: symbols.len(),
            });
        }

        Ok(Self(symbols))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}
