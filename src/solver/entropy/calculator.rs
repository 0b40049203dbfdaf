//! Shannon entropy calculation for feedback distributions
//!
//! Given a guess and set of candidates, computes the expected information gain
//! under a uniform prior over the candidates.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the fraction of candidates that would produce feedback x.
///
/// # Examples
/// ```
/// use wordle_openings::core::Word;
/// use wordle_openings::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_feedback(guess, candidates))
}

/// Count candidates per induced feedback pattern
#[must_use]
pub fn group_by_feedback(guess: &Word, candidates: &[Word]) -> FxHashMap<u32, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        *counts.entry(Feedback::code(guess, candidate)).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a distribution of outcome counts
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one pattern with p=1)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use rustc_hash::FxHashMap;
/// use wordle_openings::solver::entropy::shannon_entropy;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(0u32, 25);
/// uniform.insert(1u32, 25);
/// uniform.insert(2u32, 25);
/// uniform.insert(3u32, 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<K, S>(counts: &std::collections::HashMap<K, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let counts: FxHashMap<u32, usize> = (0..4).map(|k| (k, 1)).collect();
        assert!((shannon_entropy(&counts) - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(0u32, 10);
        assert!(shannon_entropy(&counts).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_below_uniform() {
        let uniform: FxHashMap<u32, usize> = (0..4).map(|k| (k, 25)).collect();
        let skewed: FxHashMap<u32, usize> =
            [(0, 97), (1, 1), (2, 1), (3, 1)].into_iter().collect();

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<u32, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_all_same_feedback_is_zero() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        assert!(calculate_entropy(&guess, &candidates).abs() < 0.001);
    }

    #[test]
    fn entropy_perfect_split_is_one_bit() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);
        assert!((calculate_entropy(&guess, &candidates) - 1.0).abs() < 0.001);
    }

    #[test]
    fn entropy_bounded_by_candidate_count() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "trace", "raise"]);
        let entropy = calculate_entropy(&guess, &candidates);
        assert!(entropy > 1.0 && entropy <= 2.0);
    }

    #[test]
    fn group_by_feedback_partitions_all_candidates() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "crate", "grate", "irate"]);
        let groups = group_by_feedback(&guess, &candidates);

        assert_eq!(groups.values().sum::<usize>(), candidates.len());
        // GRATE and IRATE both give XGGXG
        assert_eq!(groups.len(), 3);
    }
}
