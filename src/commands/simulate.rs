//! Play every solution and collect statistics
//!
//! Runs the player against each (or every Nth) solution word in parallel.

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{GamePlayer, GameRecord, Strategy};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Which solutions to simulate
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Stop after this many solutions
    pub limit: Option<usize>,
    /// Take only every Nth solution (1 means all)
    pub every: usize,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            limit: None,
            every: 1,
            show_progress: true,
        }
    }
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationStatistics {
    /// Fixed first guess the player used, if any
    pub opening: Option<Word>,
    pub total_words: usize,
    pub solved: usize,
    pub failures: Vec<(Word, SolverError)>,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(Word, usize)>,
    /// Per turn index: how often each word was guessed
    pub guesses_per_turn: Vec<FxHashMap<Word, usize>>,
}

impl SimulationStatistics {
    /// Most frequent guess at each turn, with its count
    ///
    /// Ties go to the alphabetically first word.
    #[must_use]
    pub fn most_frequent_guesses(&self) -> Vec<(&Word, usize)> {
        self.guesses_per_turn
            .iter()
            .filter_map(|counts| {
                counts
                    .iter()
                    .map(|(word, &count)| (word, count))
                    .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
            })
            .collect()
    }
}

/// The solutions a run will play
#[must_use]
pub fn select_solutions<'a>(solutions: &'a [Word], config: &SimulationConfig) -> Vec<&'a Word> {
    solutions
        .iter()
        .step_by(config.every.max(1))
        .take(config.limit.unwrap_or(usize::MAX))
        .collect()
}

/// Run the player on all selected solutions
pub fn run_simulation<S: Strategy>(
    player: &GamePlayer<'_, S>,
    solutions: &[Word],
    config: &SimulationConfig,
) -> SimulationStatistics {
    let test_words = select_solutions(solutions, config);

    let pb = if config.show_progress {
        ProgressBar::new(test_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {eta}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let results: Vec<(&Word, Result<GameRecord, SolverError>)> = test_words
        .par_iter()
        .progress_with(pb.clone())
        .map(|&solution| (solution, player.play(solution)))
        .collect();
    pb.finish_and_clear();

    summarize(results, player.config().opening.clone(), start.elapsed())
}

fn summarize(
    results: Vec<(&Word, Result<GameRecord, SolverError>)>,
    opening: Option<Word>,
    total_time: Duration,
) -> SimulationStatistics {
    let total_words = results.len();
    let mut failures = Vec::new();
    let mut records = Vec::new();

    for (solution, result) in results {
        match result {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!("{solution}: {error}");
                failures.push((solution.clone(), error));
            }
        }
    }

    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut guesses_per_turn: Vec<FxHashMap<Word, usize>> = Vec::new();
    for record in &records {
        *guess_distribution.entry(record.guess_count()).or_insert(0) += 1;

        for (turn, guess) in record.guesses().into_iter().enumerate() {
            if guesses_per_turn.len() <= turn {
                guesses_per_turn.push(FxHashMap::default());
            }
            *guesses_per_turn[turn].entry(guess.clone()).or_insert(0) += 1;
        }
    }

    let solved = records.len();
    let total_guesses: usize = records.iter().map(GameRecord::guess_count).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let max_guesses = records.iter().map(GameRecord::guess_count).max().unwrap_or(0);
    let min_guesses = records.iter().map(GameRecord::guess_count).min().unwrap_or(0);

    let mut worst_words: Vec<(Word, usize)> = records
        .iter()
        .filter(|r| r.guess_count() >= 5)
        .map(|r| (r.solution.clone(), r.guess_count()))
        .collect();
    worst_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    worst_words.truncate(10);

    SimulationStatistics {
        opening,
        total_words,
        solved,
        failures,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        worst_words,
        guesses_per_turn,
    }
}
