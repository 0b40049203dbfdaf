//! Wordle Openings
//!
//! A Wordle solver with entropy, minimax, and simple scoring strategies, plus
//! an exhaustive search for the best letter-disjoint opening sequence.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_openings::core::{Feedback, Word};
//! use wordle_openings::search::{OpeningSearch, prepare_vocabulary, seeded_combinations};
//!
//! let guess = Word::new("apple").unwrap();
//! let solution = Word::new("allot").unwrap();
//! assert_eq!(Feedback::evaluate(&guess, &solution).to_string(), "GXX?X");
//!
//! let words: Vec<Word> = ["roate", "lysin", "chump", "crane", "moist"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let seed = Word::new("roate").unwrap();
//! let openings = seeded_combinations(&prepare_vocabulary(&words, &seed), 1, &seed).unwrap();
//!
//! let report = OpeningSearch::new(&seed, &openings, &words).run().unwrap();
//! println!("best: {} ({:.2} left)", report.best, report.average_words_left);
//! ```

// Core domain types
pub mod core;

// Crate error type
pub mod error;

// Solving algorithms
pub mod solver;

// Opening search
pub mod search;

// Word lists and caching
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
