//! Letter-disjoint opening enumeration
//!
//! Walks every k-subset of a vocabulary in lexicographic index order, adds the
//! seed word, and keeps only the sets whose words share no letters.

use super::GuessCombination;
use crate::core::Word;
use crate::error::SolverError;
use log::debug;
use rustc_hash::FxHashSet;

/// Lazy iterator over ascending k-tuples of indices into `0..n`
///
/// Yields `C(n, k)` tuples, starting at `[0, 1, .., k-1]` and ending at
/// `[n-k, .., n-1]`.
///
/// # Examples
/// ```
/// use wordle_openings::search::IndexCombinations;
///
/// let tuples: Vec<Vec<usize>> = IndexCombinations::new(4, 2).unwrap().collect();
/// assert_eq!(tuples.len(), 6);
/// assert_eq!(tuples[0], vec![0, 1]);
/// assert_eq!(tuples[5], vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct IndexCombinations {
    n: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl IndexCombinations {
    /// # Errors
    /// Returns `InvalidCombinationSize` if `k > n`.
    pub fn new(n: usize, k: usize) -> Result<Self, SolverError> {
        if k > n {
            return Err(SolverError::InvalidCombinationSize {
                size: k,
                available: n,
            });
        }

        Ok(Self {
            n,
            indices: (0..k).collect(),
            exhausted: false,
        })
    }

    /// Move to the next tuple in place; false once the last tuple was passed
    fn advance(&mut self) -> bool {
        let k = self.indices.len();

        // Rightmost index that can still move right
        let Some(pivot) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            return false;
        };

        self.indices[pivot] += 1;
        for i in pivot + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let current = self.indices.clone();
        self.exhausted = !self.advance();
        Some(current)
    }
}

/// Reduce a raw vocabulary to the words worth combining with `seed`
///
/// Drops duplicates, words with a repeated letter, the seed itself, and words
/// sharing a letter with the seed (no disjoint set could contain them).
/// First-seen order is kept.
#[must_use]
pub fn prepare_vocabulary(words: &[Word], seed: &Word) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    let prepared: Vec<Word> = words
        .iter()
        .filter(|word| {
            word.len() == seed.len()
                && !word.has_repeated_letters()
                && *word != seed
                && !word.shares_letters(seed)
        })
        .filter(|word| seen.insert(word.text()))
        .cloned()
        .collect();

    debug!(
        "{} of {} words usable alongside seed {}",
        prepared.len(),
        words.len(),
        seed
    );
    prepared
}

/// Enumerate every letter-disjoint opening of `k` vocabulary words plus `seed`
///
/// Each raw k-combination is joined with the seed and kept only if no two of
/// its words share a letter. Results follow the lexicographic index order.
///
/// # Errors
/// Returns `InvalidCombinationSize` if `k` exceeds the vocabulary size.
///
/// # Examples
/// ```
/// use wordle_openings::core::Word;
/// use wordle_openings::search::seeded_combinations;
///
/// let seed = Word::new("roate").unwrap();
/// let vocabulary: Vec<Word> = ["lysin", "chump", "bumph"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let combinations = seeded_combinations(&vocabulary, 2, &seed).unwrap();
/// // CHUMP and BUMPH overlap, so only pairs with LYSIN survive
/// assert_eq!(combinations.len(), 2);
/// assert!(combinations.iter().all(|c| c.len() == 3 && c.contains(&seed)));
/// ```
pub fn seeded_combinations(
    vocabulary: &[Word],
    k: usize,
    seed: &Word,
) -> Result<Vec<GuessCombination>, SolverError> {
    let combinations: Vec<GuessCombination> = IndexCombinations::new(vocabulary.len(), k)?
        .filter(|indices| is_disjoint_with_seed(vocabulary, indices, seed))
        .map(|indices| {
            GuessCombination::new(
                indices
                    .into_iter()
                    .map(|i| vocabulary[i].clone())
                    .chain(std::iter::once(seed.clone())),
            )
        })
        .collect();

    debug!(
        "{} letter-disjoint combinations of size {} with seed {}",
        combinations.len(),
        k + 1,
        seed
    );
    Ok(combinations)
}

/// Pairwise letter-intersection test over the chosen words and the seed
fn is_disjoint_with_seed(vocabulary: &[Word], indices: &[usize], seed: &Word) -> bool {
    let members: Vec<&Word> = indices
        .iter()
        .map(|&i| &vocabulary[i])
        .chain(std::iter::once(seed))
        .collect();

    members.iter().enumerate().all(|(i, word)| {
        members[i + 1..]
            .iter()
            .all(|other| !word.shares_letters(other))
    })
}
