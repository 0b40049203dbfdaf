//! Error type shared by the solver and the opening search

use thiserror::Error;

/// Failures raised while playing, scoring, or searching
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// No candidate solutions remain, although the true solution must always
    /// stay consistent with its own feedback
    #[error("no words left after guessing \"{guess}\" (solution was \"{solution}\")")]
    VocabularyExhausted { solution: String, guess: String },

    /// The true solution was filtered out of the candidate set
    #[error("solution \"{solution}\" was filtered out after guessing \"{guess}\"")]
    AnswerUnreachable { solution: String, guess: String },

    /// The requested solution is not in the solution vocabulary
    #[error("\"{0}\" is not in the solution vocabulary")]
    UnknownSolution(String),

    #[error("combination size {size} exceeds the {available} available words")]
    InvalidCombinationSize { size: usize, available: usize },

    #[error("no guesses available")]
    EmptyGuessPool,

    #[error("\"{solution}\" not solved within {turns} turns")]
    TurnLimitExceeded { solution: String, turns: usize },

    #[error("\"{word}\" has {actual} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },

    /// An opening search was given no combinations or no solutions
    #[error("nothing to search: {combinations} combinations, {solutions} solutions")]
    EmptySearch {
        combinations: usize,
        solutions: usize,
    },

    /// Every replay of an opening search hit an integrity error
    #[error("all {0} replays failed")]
    NoSuccessfulReplays(usize),
}
