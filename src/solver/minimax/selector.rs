//! Minimax-based guess selection
//!
//! Selects the guess that minimizes the worst-case remaining candidates, then the
//! average, then the best case, then the pool position.

use super::calculator::{GuessRanking, rank_guess};
use crate::core::{KnowledgeState, Word};
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Rankings are computed in parallel, one task per guess, and compared once all
/// have finished. Returns `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_openings::core::{KnowledgeState, Word};
/// use wordle_openings::solver::minimax::select_best_guess;
///
/// let guesses = vec![
///     Word::new("zzzzz").unwrap(),
///     Word::new("crane").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("crate").unwrap(),
/// ];
///
/// let (best, ranking) = select_best_guess(&guesses, &candidates, &KnowledgeState::new(5)).unwrap();
/// assert_eq!(best.text(), "crane");
/// assert_eq!(ranking.worst_case, 1);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[Word],
    state: &KnowledgeState,
) -> Option<(&'a Word, GuessRanking)> {
    let rankings: Vec<GuessRanking> = guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| rank_guess(index, guess, candidates, state))
        .collect();

    rankings
        .into_iter()
        .min()
        .map(|ranking| (&guess_pool[ranking.index], ranking))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn selects_lowest_worst_case() {
        let guesses = words(&["zzzzz", "crane"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let (best, ranking) =
            select_best_guess(&guesses, &candidates, &KnowledgeState::new(5)).unwrap();

        assert_eq!(best.text(), "crane");
        assert!(ranking.worst_case < 4);
    }

    #[test]
    fn chosen_worst_case_not_beaten_by_any_candidate() {
        let pool = words(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "moist", "apple", "lysin",
            "tulip", "audio",
        ]);
        let candidates = words(&["crate", "grate", "irate", "trace", "slate", "plate", "moist"]);
        let state = KnowledgeState::new(5);

        let (_, chosen) = select_best_guess(&pool, &candidates, &state).unwrap();

        for (index, guess) in pool.iter().enumerate() {
            let ranking = rank_guess(index, guess, &candidates, &state);
            assert!(chosen.worst_case <= ranking.worst_case);
            assert!(chosen <= ranking);
        }
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let guesses = words(&["aaaaa", "bbbbb"]);
        let candidates = words(&["ccccc", "ddddd"]);

        let (best, ranking) =
            select_best_guess(&guesses, &candidates, &KnowledgeState::new(5)).unwrap();
        assert_eq!(best.text(), "aaaaa");
        assert_eq!(ranking.index, 0);
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = words(&["slate"]);
        assert!(select_best_guess(&[], &candidates, &KnowledgeState::new(5)).is_none());
    }
}
