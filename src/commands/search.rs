//! Opening search command
//!
//! Loads or enumerates the openings for a seed, then runs the search with a
//! live progress bar.

use crate::core::Word;
use crate::output::formatters::{format_duration, format_opening};
use crate::search::{
    GuessCombination, OpeningReport, OpeningSearch, SearchConfig, prepare_vocabulary,
    seeded_combinations,
};
use crate::wordlists::CombinationCache;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

/// Openings for `seed`, from the cache when possible
///
/// A cache file that fails to load is reported and replaced.
///
/// # Errors
///
/// Returns an error if enumeration fails or a fresh cache file cannot be
/// written.
pub fn load_or_enumerate(
    seed: &Word,
    guesses: &[Word],
    config: &SearchConfig,
) -> Result<Vec<GuessCombination>> {
    let cache = CombinationCache::new(&config.cache_dir);

    if config.use_cache {
        match cache.load(seed, config.combination_size) {
            Ok(Some(combinations)) => return Ok(combinations),
            Ok(None) => {}
            Err(e) => warn!("ignoring combination cache: {e:#}"),
        }
    }

    let vocabulary = prepare_vocabulary(guesses, seed);
    let combinations = seeded_combinations(&vocabulary, config.combination_size, seed)
        .with_context(|| format!("cannot build openings around {seed}"))?;
    info!(
        "enumerated {} openings around {seed} from {} words",
        combinations.len(),
        vocabulary.len()
    );

    if config.use_cache {
        cache.store(seed, &combinations)?;
    }
    Ok(combinations)
}

/// Run the opening search for one seed
///
/// # Errors
///
/// Returns an error if no openings can be built or every replay failed.
pub fn run_search(
    seed: &Word,
    guesses: &[Word],
    solutions: &[Word],
    config: &SearchConfig,
    show_progress: bool,
) -> Result<OpeningReport> {
    let combinations = load_or_enumerate(seed, guesses, config)?;

    let pb = if show_progress {
        ProgressBar::new(solutions.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("seed {}", seed.text().to_uppercase()));

    let report = OpeningSearch::new(seed, &combinations, solutions)
        .with_progress_interval(config.progress_interval)
        .run_with_progress(|snapshot| {
            pb.set_position(snapshot.finished as u64);
            if let Some((best, average)) = snapshot.best {
                let remaining = snapshot
                    .estimated_remaining
                    .map_or_else(|| "?".to_string(), format_duration);
                pb.set_message(format!(
                    "best {} ({average:.3}) | {} elapsed, ~{remaining} left",
                    format_opening(&best.play_order(seed)),
                    format_duration(snapshot.elapsed),
                ));
            }
        })
        .with_context(|| format!("opening search for seed {seed} failed"))?;
    pb.finish_and_clear();

    Ok(report)
}
