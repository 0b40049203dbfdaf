//! Worst/average/best-case ranking of a guess
//!
//! For each possible solution, simulates the feedback a guess would receive and
//! counts how many candidates would survive the resulting knowledge state.

use crate::core::{Feedback, KnowledgeState, Word, count_possible};
use std::cmp::Ordering;

/// Aggregate remaining-candidate statistics for one guess
///
/// Orders by (worst asc, total asc, best asc, index asc), so the minimum is the
/// preferred guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRanking {
    /// Largest remaining count over all possible solutions
    pub worst_case: usize,
    /// Sum of remaining counts over all possible solutions; ranks like an average
    pub total: usize,
    /// Smallest remaining count; 0 if the guess is itself a candidate
    pub best_case: usize,
    /// Position of the guess in the guess pool
    pub index: usize,
}

impl GuessRanking {
    /// Average remaining count over the candidates scored
    #[must_use]
    pub fn average(&self, candidates: usize) -> f64 {
        if candidates == 0 {
            0.0
        } else {
            self.total as f64 / candidates as f64
        }
    }
}

impl Ord for GuessRanking {
    fn cmp(&self, other: &Self) -> Ordering {
        self.worst_case
            .cmp(&other.worst_case)
            .then(self.total.cmp(&other.total))
            .then(self.best_case.cmp(&other.best_case))
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for GuessRanking {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rank a guess against every candidate it could be tested on
///
/// A simulated count of 0 is replaced by the full candidate count. The true
/// solution always survives its own feedback, so a zero only shows up when the
/// candidates were filtered under a different state than `state`.
///
/// # Examples
/// ```
/// use wordle_openings::core::{KnowledgeState, Word};
/// use wordle_openings::solver::minimax::rank_guess;
///
/// let candidates: Vec<Word> = ["slate", "crate", "zzzzz"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let ranking = rank_guess(0, &candidates[0], &candidates, &KnowledgeState::new(5));
/// assert_eq!(ranking.best_case, 0); // SLATE is itself a candidate
/// assert_eq!(ranking.worst_case, 1);
/// ```
#[must_use]
pub fn rank_guess(
    index: usize,
    guess: &Word,
    candidates: &[Word],
    state: &KnowledgeState,
) -> GuessRanking {
    let mut ranking = GuessRanking {
        worst_case: 0,
        total: 0,
        best_case: usize::MAX,
        index,
    };

    for actual in candidates {
        if actual == guess {
            ranking.best_case = 0;
            continue;
        }

        let mut branch = state.clone();
        branch.update(guess, &Feedback::evaluate(guess, actual));

        let mut remaining = count_possible(&branch, candidates, true);
        if remaining == 0 {
            remaining = candidates.len();
        }

        ranking.total += remaining;
        ranking.worst_case = ranking.worst_case.max(remaining);
        ranking.best_case = ranking.best_case.min(remaining);
    }

    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn perfect_split_worst_case_is_one() {
        let candidates = words(&["slate", "zzzzz"]);
        let ranking = rank_guess(0, &candidates[0], &candidates, &KnowledgeState::new(5));

        assert_eq!(ranking.worst_case, 1);
        assert_eq!(ranking.total, 1);
        assert_eq!(ranking.best_case, 0);
    }

    #[test]
    fn uninformative_guess_keeps_everything() {
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        let guess = Word::new("zzzzz").unwrap();
        let ranking = rank_guess(0, &guess, &candidates, &KnowledgeState::new(5));

        assert_eq!(ranking.worst_case, 3);
        assert_eq!(ranking.best_case, 3);
        assert_eq!(ranking.total, 9);
        assert!((ranking.average(candidates.len()) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_count_falls_back_to_candidate_count() {
        // States inconsistent with the candidates make every count zero
        let candidates = words(&["aaaaa", "bbbbb"]);
        let guess = Word::new("ccccc").unwrap();
        let mut state = KnowledgeState::new(5);
        let red = Word::new("abxyz").unwrap();
        state.update(&red, &Feedback::evaluate(&red, &Word::new("qqqqq").unwrap()));

        let ranking = rank_guess(0, &guess, &candidates, &state);
        assert_eq!(ranking.worst_case, candidates.len());
        assert_eq!(ranking.best_case, candidates.len());
    }

    #[test]
    fn ordering_uses_each_key_in_turn() {
        let base = GuessRanking {
            worst_case: 3,
            total: 10,
            best_case: 1,
            index: 5,
        };

        assert!(GuessRanking { worst_case: 2, total: 99, ..base } < base);
        assert!(GuessRanking { total: 9, best_case: 9, ..base } < base);
        assert!(GuessRanking { best_case: 0, index: 9, ..base } < base);
        assert!(GuessRanking { index: 4, ..base } < base);
    }
}
