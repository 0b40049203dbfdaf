//! Guess scoring and game play
//!
//! Three interchangeable scorers (simple, entropy, minmax) behind the
//! [`Strategy`] trait, and the [`GamePlayer`] turn loop that drives them.

pub mod entropy;
pub mod minimax;
mod player;
pub mod simple;
pub mod strategy;

pub use player::{GameConfig, GamePlayer, GameRecord, Turn, play_turn};
pub use strategy::{EntropyStrategy, MinimaxStrategy, SimpleStrategy, Strategy, StrategyType};
