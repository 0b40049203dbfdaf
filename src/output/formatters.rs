//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackSymbol, Word};
use colored::{ColoredString, Colorize};
use std::time::Duration;

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .symbols()
        .iter()
        .map(|symbol| match symbol {
            FeedbackSymbol::Absent => '⬜',
            FeedbackSymbol::Misplaced => '🟨',
            FeedbackSymbol::Correct => '🟩',
        })
        .collect()
}

/// One guessed letter coloured by its feedback
fn colored_letter(letter: char, symbol: FeedbackSymbol) -> ColoredString {
    let text = letter.to_ascii_uppercase().to_string();
    match symbol {
        FeedbackSymbol::Correct => text.green().bold(),
        FeedbackSymbol::Misplaced => text.yellow().bold(),
        FeedbackSymbol::Absent => text.red(),
    }
}

/// The guess in upper case, each letter coloured by its feedback
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.symbols())
        .map(|(letter, &symbol)| colored_letter(letter, symbol).to_string())
        .collect()
}

/// Opening words joined for display, e.g. `ROATE LYSIN CHUMP`
#[must_use]
pub fn format_opening(words: &[&Word]) -> String {
    words
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable duration: `850ms`, `12.3s`, `4m 05s`, `2h 03m`
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 3600 {
        format!("{}h {:02}m", secs / 3600, secs % 3600 / 60)
    } else if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else if secs >= 1 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
