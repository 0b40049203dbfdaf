//! Frequency-style scoring
//!
//! Sums per-position feedback weights (Absent=0, Misplaced=1, Correct=2) over every
//! candidate. Cheap, and blind to how the candidates are distributed.

use crate::core::{Feedback, Word};
use rayon::prelude::*;

/// Total weight a guess collects against all candidates
#[must_use]
pub fn calculate_score(guess: &Word, candidates: &[Word]) -> u64 {
    candidates
        .iter()
        .map(|actual| u64::from(Feedback::score_of(guess, actual)))
        .sum()
}

/// Select the guess with the highest total score
///
/// Ties go to the guess encountered first.
///
/// # Examples
/// ```
/// use wordle_openings::core::Word;
/// use wordle_openings::solver::simple::select_best_guess;
///
/// let guesses = vec![Word::new("zzzzz").unwrap(), Word::new("crate").unwrap()];
/// let candidates = vec![Word::new("grate").unwrap(), Word::new("trace").unwrap()];
///
/// let (best, score) = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.text(), "crate");
/// assert!(score > 0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(guess_pool: &'a [Word], candidates: &[Word]) -> Option<(&'a Word, u64)> {
    let scores: Vec<u64> = guess_pool
        .par_iter()
        .map(|guess| calculate_score(guess, candidates))
        .collect();

    let mut best: Option<(usize, u64)> = None;
    for (index, &score) in scores.iter().enumerate() {
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((index, score));
        }
    }

    best.map(|(index, score)| (&guess_pool[index], score))
}
