//! Entropy-based guess scoring
//!
//! Implements Shannon entropy calculation for feedback distributions.
//! This is the foundation of information-theoretic solving.

mod calculator;
mod selector;

pub use calculator::{calculate_entropy, group_by_feedback, shannon_entropy};
pub use selector::select_best_guess;
