//! Minimax guess scoring
//!
//! Implements worst-case minimization with average and best-case tiebreakers.

mod calculator;
mod selector;

pub use calculator::{GuessRanking, rank_guess};
pub use selector::select_best_guess;
