//! Guess selection strategies
//!
//! Defines the Strategy trait and the three concrete scorers.

use crate::core::{KnowledgeState, Word};
use std::fmt;
use std::str::FromStr;

/// A strategy for selecting the next guess
pub trait Strategy: Sync {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Select the next guess given the current candidates and knowledge
    ///
    /// The result is drawn from `guess_pool`, or from `candidates` where a
    /// strategy short-circuits to guessing a solution directly. Returns `None`
    /// only if there is nothing to pick from.
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &'a [Word],
        state: &KnowledgeState,
    ) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    Simple(SimpleStrategy),
    Entropy(EntropyStrategy),
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Simple(s) => s.name(),
            Self::Entropy(s) => s.name(),
            Self::Minimax(s) => s.name(),
        }
    }

    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &'a [Word],
        state: &KnowledgeState,
    ) -> Option<&'a Word> {
        match self {
            Self::Simple(s) => s.select_guess(guess_pool, candidates, state),
            Self::Entropy(s) => s.select_guess(guess_pool, candidates, state),
            Self::Minimax(s) => s.select_guess(guess_pool, candidates, state),
        }
    }
}

impl FromStr for StrategyType {
    type Err = String;

    /// Supported names: "simple", "entropy", "minmax" (or "minimax")
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple(SimpleStrategy)),
            "entropy" => Ok(Self::Entropy(EntropyStrategy)),
            "minmax" | "minimax" => Ok(Self::Minimax(MinimaxStrategy)),
            other => Err(format!(
                "unknown strategy '{other}' (expected simple, entropy or minmax)"
            )),
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sum of feedback weights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleStrategy;

impl Strategy for SimpleStrategy {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &'a [Word],
        _state: &KnowledgeState,
    ) -> Option<&'a Word> {
        if let [only] = candidates {
            return Some(only);
        }
        super::simple::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Pure entropy maximization
///
/// With two or fewer candidates left, entropy cannot usefully separate them, so
/// the first candidate is guessed directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &'a [Word],
        _state: &KnowledgeState,
    ) -> Option<&'a Word> {
        if candidates.len() <= 2 {
            return candidates.first();
        }
        super::entropy::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Worst-case minimization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn name(&self) -> &'static str {
        "minmax"
    }

    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &'a [Word],
        state: &KnowledgeState,
    ) -> Option<&'a Word> {
        if let [only] = candidates {
            return Some(only);
        }
        super::minimax::select_best_guess(guess_pool, candidates, state).map(|(best, _)| best)
    }
}
