//! Opening search
//!
//! Enumerates letter-disjoint openings around a seed word and finds the one
//! leaving the fewest candidate solutions on average.

mod combination;
mod combinations;
mod opening;

pub use combination::GuessCombination;
pub use combinations::{IndexCombinations, prepare_vocabulary, seeded_combinations};
pub use opening::{
    DEFAULT_PROGRESS_INTERVAL, OpeningReport, OpeningSearch, ProgressSnapshot, ReplayFailure,
    words_left_after_opening,
};

use std::path::PathBuf;

/// Settings for one opening search run
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Words added to the seed in each opening
    pub combination_size: usize,
    /// Finished solutions between progress reports
    pub progress_interval: usize,
    pub cache_dir: PathBuf,
    /// Read and write the combination cache
    pub use_cache: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            combination_size: 2,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            cache_dir: PathBuf::from("combinations"),
            use_cache: true,
        }
    }
}
