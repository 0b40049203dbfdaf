//! Word list loading
//!
//! Reads one word per line, keeping only valid words of the requested length.

use crate::core::Word;
use anyhow::{Context, Result, bail};
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load the distinct words of `length` letters from a file
///
/// Lines are trimmed and lowercased; blank lines, non-letter entries, and words
/// of another length are skipped. First-seen order is kept.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no usable word.
///
/// # Examples
/// ```no_run
/// use wordle_openings::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlewords.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let lines: Vec<&str> = content.lines().collect();
    let words = words_from_slice(&lines, length);
    debug!(
        "{}: {} usable words from {} lines",
        path.display(),
        words.len(),
        lines.len()
    );

    if words.is_empty() {
        bail!(
            "word list {} has no valid {length}-letter words",
            path.display()
        );
    }
    Ok(words)
}

/// Convert string entries into distinct words of `length` letters
///
/// # Examples
/// ```
/// use wordle_openings::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "CRANE", "toolong", "slate"], 5);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(entries: &[&str], length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    entries
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| Word::with_length(entry, length).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
