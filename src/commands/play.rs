//! Single game command
//!
//! Plays one game against a chosen or random solution.

use crate::core::Word;
use crate::solver::{GamePlayer, GameRecord, Strategy};
use anyhow::{Context, Result, anyhow};
use rand::prelude::IndexedRandom;

/// Resolve the solution to play against
///
/// A given word is validated against `length`; without one a random solution
/// is drawn.
///
/// # Errors
///
/// Returns an error if the word is invalid or `solutions` is empty.
pub fn choose_solution(solutions: &[Word], requested: Option<&str>, length: usize) -> Result<Word> {
    match requested {
        Some(text) => {
            Word::with_length(text, length).with_context(|| format!("invalid solution '{text}'"))
        }
        None => solutions
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| anyhow!("solution list is empty")),
    }
}

/// Play one game
///
/// # Errors
///
/// Returns an error if the solution is not in the solution list or the game
/// fails an integrity check.
///
/// # Examples
/// ```
/// use wordle_openings::commands::play_game;
/// use wordle_openings::core::Word;
/// use wordle_openings::solver::{GamePlayer, MinimaxStrategy};
///
/// let words: Vec<Word> = ["crane", "slate", "irate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let player = GamePlayer::new(MinimaxStrategy, &words, &words);
///
/// let record = play_game(&player, &words[1]).unwrap();
/// assert_eq!(record.solution, words[1]);
/// ```
pub fn play_game<S: Strategy>(player: &GamePlayer<'_, S>, solution: &Word) -> Result<GameRecord> {
    player
        .play(solution)
        .with_context(|| format!("{} failed to solve {solution}", player.strategy().name()))
}
