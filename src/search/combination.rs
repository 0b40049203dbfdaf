//! A fixed set of opening guesses

use crate::core::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An unordered set of words played as one opening
///
/// Words are kept sorted and deduplicated, so equality and hashing depend only
/// on set content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Word>", into = "Vec<Word>")]
pub struct GuessCombination {
    words: Vec<Word>,
}

impl GuessCombination {
    /// Build a combination from any collection of words
    ///
    /// # Examples
    /// ```
    /// use wordle_openings::core::Word;
    /// use wordle_openings::search::GuessCombination;
    ///
    /// let a = Word::new("roate").unwrap();
    /// let b = Word::new("lysin").unwrap();
    ///
    /// assert_eq!(
    ///     GuessCombination::new([a.clone(), b.clone()]),
    ///     GuessCombination::new([b, a]),
    /// );
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort();
        words.dedup();
        Self { words }
    }

    /// Words in sorted order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// True if no two member words share a letter
    #[must_use]
    pub fn is_letter_disjoint(&self) -> bool {
        self.words.iter().enumerate().all(|(i, word)| {
            self.words[i + 1..]
                .iter()
                .all(|other| !word.shares_letters(other))
        })
    }

    /// Member words in play order: `seed` first, the rest sorted
    #[must_use]
    pub fn play_order<'a>(&'a self, seed: &'a Word) -> Vec<&'a Word> {
        std::iter::once(seed)
            .chain(self.words.iter().filter(|w| *w != seed))
            .collect()
    }
}

impl From<Vec<Word>> for GuessCombination {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}

impl From<GuessCombination> for Vec<Word> {
    fn from(combination: GuessCombination) -> Self {
        combination.words
    }
}

impl fmt::Display for GuessCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let texts: Vec<&str> = self.words.iter().map(Word::text).collect();
        write!(f, "[{}]", texts.join(", "))
    }
}
