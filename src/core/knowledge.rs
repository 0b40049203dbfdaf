//! Accumulated constraints from the feedback seen in one game
//!
//! Three kinds of knowledge are tracked:
//! - reds: letters confirmed absent from the solution
//! - greens: per position, the letter confirmed there (if any)
//! - yellows: per letter, the positions confirmed NOT to hold it
//!
//! The state is a small fixed-size value, so `clone()` is a plain copy. Every
//! branch that explores a state independently works on its own copy.

use super::word::{MAX_WORD_LENGTH, letter_bit};
use super::{Feedback, FeedbackSymbol, Word};

/// What is known about the solution after some guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeState {
    length: usize,
    reds: u32,
    greens: [Option<u8>; MAX_WORD_LENGTH],
    yellows: [u32; 26],
}

impl KnowledgeState {
    /// Create an empty state for words of the given length
    ///
    /// # Panics
    /// Panics if `length` exceeds [`MAX_WORD_LENGTH`]
    #[must_use]
    pub fn new(length: usize) -> Self {
        assert!(length <= MAX_WORD_LENGTH, "word length {length} unsupported");
        Self {
            length,
            reds: 0,
            greens: [None; MAX_WORD_LENGTH],
            yellows: [0; 26],
        }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    /// Fold the feedback for `guess` into this state
    ///
    /// Correct fixes the green slot, Absent marks the letter red, and Misplaced
    /// records that the letter is not at that position.
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        debug_assert_eq!(guess.len(), self.length);
        debug_assert_eq!(feedback.len(), self.length);

        let pairs = guess.letters().iter().zip(feedback.symbols());
        for (i, (&letter, &symbol)) in pairs.enumerate() {
            match symbol {
                FeedbackSymbol::Correct => self.greens[i] = Some(letter),
                FeedbackSymbol::Absent => self.reds |= letter_bit(letter),
                FeedbackSymbol::Misplaced => {
                    self.yellows[usize::from(letter - b'a')] |= 1 << i;
                }
            }
        }
    }

    /// Check whether `word` is consistent with everything known
    ///
    /// A word is rejected if it contains a red letter anywhere, disagrees with a
    /// fixed green slot, or (only when `exclude_yellows` is set) places a letter
    /// at a position already marked yellow for it.
    ///
    /// Candidate solutions are filtered with `exclude_yellows = false`; guess
    /// pools and minmax branches use `true`.
    ///
    /// # Examples
    /// ```
    /// use wordle_openings::core::{Feedback, KnowledgeState, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let solution = Word::new("allot").unwrap();
    ///
    /// let mut state = KnowledgeState::new(5);
    /// state.update(&guess, &Feedback::evaluate(&guess, &solution));
    ///
    /// assert!(state.is_possible(&solution, false));
    /// assert!(!state.is_possible(&Word::new("aping").unwrap(), false)); // P is absent
    /// ```
    #[must_use]
    pub fn is_possible(&self, word: &Word, exclude_yellows: bool) -> bool {
        if word.mask() & self.reds != 0 {
            return false;
        }

        word.letters().iter().enumerate().all(|(i, &letter)| {
            if self.greens[i].is_some_and(|green| green != letter) {
                return false;
            }
            !(exclude_yellows && self.yellows[usize::from(letter - b'a')] & (1 << i) != 0)
        })
    }

    /// Letters confirmed absent, in alphabetical order
    #[must_use]
    pub fn reds(&self) -> Vec<u8> {
        (b'a'..=b'z')
            .filter(|&letter| self.reds & letter_bit(letter) != 0)
            .collect()
    }

    /// Confirmed letter per position
    #[must_use]
    pub fn greens(&self) -> &[Option<u8>] {
        &self.greens[..self.length]
    }

    /// Positions confirmed not to hold `letter`
    #[must_use]
    pub fn yellow_positions(&self, letter: u8) -> Vec<usize> {
        let positions = self.yellows[usize::from(letter - b'a')];
        (0..self.length)
            .filter(|&i| positions & (1 << i) != 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn after(guesses: &[&str], solution: &str) -> KnowledgeState {
        let solution = w(solution);
        let mut state = KnowledgeState::new(solution.len());
        for guess in guesses {
            let guess = w(guess);
            state.update(&guess, &Feedback::evaluate(&guess, &solution));
        }
        state
    }

    #[test]
    fn update_records_each_symbol_kind() {
        let state = after(&["apple"], "allot");

        assert_eq!(state.greens(), &[Some(b'a'), None, None, None, None]);
        assert_eq!(state.reds(), vec![b'e', b'p']);
        assert_eq!(state.yellow_positions(b'l'), vec![3]);
        assert!(state.yellow_positions(b'a').is_empty());
    }

    #[test]
    fn empty_state_accepts_everything() {
        let state = KnowledgeState::new(5);
        for word in ["crane", "aaaaa", "zzzzz"] {
            assert!(state.is_possible(&w(word), true));
            assert!(state.is_possible(&w(word), false));
        }
    }

    #[test]
    fn rejects_red_letters_anywhere() {
        let state = after(&["crane"], "moist");
        assert!(!state.is_possible(&w("champ"), false));
        assert!(state.is_possible(&w("moist"), false));
    }

    #[test]
    fn rejects_green_mismatch() {
        let state = after(&["crane"], "crust");
        assert!(!state.is_possible(&w("trust"), false));
        assert!(state.is_possible(&w("crust"), false));
    }

    #[test]
    fn yellows_only_checked_when_excluded() {
        // L is yellow at position 3
        let state = after(&["apple"], "allot");
        let word = w("atoll"); // L at position 3
        assert!(state.is_possible(&word, false));
        assert!(!state.is_possible(&word, true));
    }

    #[test]
    fn solution_always_consistent_with_own_feedback() {
        let words = ["crane", "apple", "allot", "speed", "erase", "robot", "floor"];
        for solution in words {
            let state = after(&words, solution);
            assert!(state.is_possible(&w(solution), false));
            assert!(state.is_possible(&w(solution), true));
        }
    }

    #[test]
    fn clones_are_independent() {
        let original = after(&["crane"], "slate");
        let mut branch = original.clone();
        let guess = w("moist");
        branch.update(&guess, &Feedback::evaluate(&guess, &w("slate")));

        assert_ne!(original, branch);
        assert!(original.is_possible(&w("blame"), false));
        assert!(!branch.is_possible(&w("blame"), false)); // M is absent
    }
}
