//! On-disk cache of enumerated openings
//!
//! One JSON file per seed word, holding the letter-disjoint combinations so
//! later searches can skip enumeration.

use crate::core::Word;
use crate::search::GuessCombination;
use anyhow::{Context, Result, ensure};
use log::{debug, info};
use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Directory of cached combination lists keyed by seed
#[derive(Debug, Clone)]
pub struct CombinationCache {
    dir: PathBuf,
}

impl CombinationCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the combinations for `seed`
    #[must_use]
    pub fn path_for(&self, seed: &Word) -> PathBuf {
        self.dir.join(format!("combinations_{seed}.json"))
    }

    /// Load the cached combinations for `seed`, or `None` if nothing is cached
    ///
    /// Every entry must contain the seed, hold `combination_size + 1` words of
    /// the seed's length, and be letter-disjoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any entry
    /// fails validation.
    pub fn load(&self, seed: &Word, combination_size: usize) -> Result<Option<Vec<GuessCombination>>> {
        let path = self.path_for(seed);
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no cached combinations at {}", path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to open {}", path.display()));
            }
        };

        let combinations: Vec<GuessCombination> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse {}", path.display()))?;

        for combination in &combinations {
            ensure!(
                combination.contains(seed),
                "{}: {combination} does not contain seed {seed}",
                path.display()
            );
            ensure!(
                combination.len() == combination_size + 1,
                "{}: {combination} has {} words, expected {}",
                path.display(),
                combination.len(),
                combination_size + 1
            );
            ensure!(
                combination.words().iter().all(|w| w.len() == seed.len()),
                "{}: {combination} mixes word lengths, expected {}",
                path.display(),
                seed.len()
            );
            ensure!(
                combination.is_letter_disjoint(),
                "{}: {combination} repeats a letter",
                path.display()
            );
        }

        info!(
            "loaded {} cached combinations from {}",
            combinations.len(),
            path.display()
        );
        Ok(Some(combinations))
    }

    /// Write the combinations for `seed`, replacing any previous file
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn store(&self, seed: &Word, combinations: &[GuessCombination]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;

        let path = self.path_for(seed);
        let file = fs::File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, combinations)
            .with_context(|| format!("failed to write {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("failed to write {}", path.display()))?;

        info!(
            "cached {} combinations at {}",
            combinations.len(),
            path.display()
        );
        Ok(path)
    }
}
