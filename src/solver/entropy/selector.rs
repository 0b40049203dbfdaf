//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;

/// Select best guess by maximizing entropy
///
/// Every guess is scored independently in parallel. Ties go to the guess
/// encountered first in `guess_pool`. Returns the winner and its entropy, or
/// `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_openings::core::Word;
/// use wordle_openings::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let (best, entropy) = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.text(), "aeros");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(guess_pool: &'a [Word], candidates: &[Word]) -> Option<(&'a Word, f64)> {
    let entropies: Vec<f64> = guess_pool
        .par_iter()
        .map(|guess| calculate_entropy(guess, candidates))
        .collect();

    let mut best: Option<(usize, f64)> = None;
    for (index, &entropy) in entropies.iter().enumerate() {
        if best.is_none_or(|(_, top)| entropy > top) {
            best = Some((index, entropy));
        }
    }

    best.map(|(index, entropy)| (&guess_pool[index], entropy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn selects_highest_entropy() {
        let guesses = words(&["aaaaa", "aeros"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let (best, entropy) = select_best_guess(&guesses, &candidates).unwrap();

        assert_eq!(best.text(), "aeros");
        assert!(entropy > 0.5);
    }

    #[test]
    fn chosen_guess_is_maximal_over_pool() {
        let pool = words(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "moist", "apple", "lysin",
            "tulip", "audio", "zzzzz",
        ]);
        let candidates = words(&["crate", "grate", "irate", "trace", "slate", "plate", "moist"]);

        let (best, entropy) = select_best_guess(&pool, &candidates).unwrap();

        for guess in &pool {
            assert!(calculate_entropy(guess, &candidates) <= entropy);
        }
        assert!((calculate_entropy(best, &candidates) - entropy).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_go_to_first_encountered() {
        // Both guesses leave a single certain outcome
        let guesses = words(&["aaaaa", "bbbbb"]);
        let candidates = words(&["ccccc"]);

        let (best, _) = select_best_guess(&guesses, &candidates).unwrap();
        assert_eq!(best.text(), "aaaaa");
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = words(&["slate"]);
        assert!(select_best_guess(&[], &candidates).is_none());
    }
}
