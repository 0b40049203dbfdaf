//! Core domain types for Wordle-style puzzles
//!
//! Words, the feedback rule, the knowledge model built from feedback, and
//! candidate filtering. Everything here is pure and single-threaded.

mod feedback;
pub mod filter;
mod knowledge;
mod word;

pub use feedback::{Feedback, FeedbackParseError, FeedbackSymbol};
pub use filter::{count_possible, filter_candidates, retain_possible};
pub use knowledge::KnowledgeState;
pub use word::{MAX_WORD_LENGTH, Word, WordError};
