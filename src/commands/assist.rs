//! Interactive assistant
//!
//! Suggests a guess, reads back the feedback the player actually got, and
//! narrows the candidates.

use crate::core::{Feedback, KnowledgeState, Word, retain_possible};
use crate::output::display::print_assist_turn;
use crate::solver::Strategy;
use crate::solver::entropy::{group_by_feedback, shannon_entropy};
use crate::solver::minimax::{GuessRanking, rank_guess};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Knowledge gathered from feedback the player typed in
pub struct Assistant<'a, S: Strategy> {
    strategy: S,
    guess_pool: &'a [Word],
    solutions: &'a [Word],
    opening: Option<Word>,
    state: KnowledgeState,
    guesses: Vec<Word>,
    candidates: Vec<Word>,
    history: Vec<(Word, Feedback)>,
}

impl<'a, S: Strategy> Assistant<'a, S> {
    pub fn new(
        strategy: S,
        guess_pool: &'a [Word],
        solutions: &'a [Word],
        length: usize,
        opening: Option<Word>,
    ) -> Self {
        Self {
            strategy,
            guess_pool,
            solutions,
            opening,
            state: KnowledgeState::new(length),
            guesses: guess_pool.to_vec(),
            candidates: solutions.to_vec(),
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.state.word_length()
    }

    /// Next guess to play, or `None` when no candidate is left
    #[must_use]
    pub fn suggest(&self) -> Option<&Word> {
        if self.candidates.is_empty() {
            return None;
        }
        if let (true, Some(opening)) = (self.history.is_empty(), &self.opening) {
            return Some(opening);
        }

        let pool = if self.guesses.is_empty() {
            &self.candidates
        } else {
            &self.guesses
        };
        self.strategy
            .select_guess(pool, &self.candidates, &self.state)
    }

    /// Candidates left after `guess`, worst case and summed over the candidates
    #[must_use]
    pub fn rank(&self, guess: &Word) -> GuessRanking {
        rank_guess(0, guess, &self.candidates, &self.state)
    }

    /// Fold in the feedback received for `guess`
    pub fn record(&mut self, guess: Word, feedback: Feedback) {
        self.state.update(&guess, &feedback);
        self.guesses.retain(|w| *w != guess);
        if feedback.is_solved() {
            self.candidates = vec![guess.clone()];
        } else {
            self.candidates.retain(|w| *w != guess);
            retain_possible(&mut self.candidates, &self.state, false);
        }
        self.history.push((guess, feedback));
    }

    /// Forget the last recorded turn; false if there was none
    pub fn undo(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }

        let history = std::mem::take(&mut self.history);
        self.reset();
        for (guess, feedback) in history {
            self.record(guess, feedback);
        }
        true
    }

    /// Start a new game
    pub fn reset(&mut self) {
        self.state = KnowledgeState::new(self.state.word_length());
        self.guesses = self.guess_pool.to_vec();
        self.candidates = self.solutions.to_vec();
        self.history.clear();
    }
}

/// Run the interactive loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist<S: Strategy>(assistant: &mut Assistant<'_, S>) -> Result<()> {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(" {} ", "WORDLE ASSISTANT".bright_cyan().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\nPlay the suggested word (or type your own), then enter the feedback:");
    println!("  - G/g/🟩 for green (correct position)");
    println!("  - Y/y/?/🟨 for yellow (wrong position)");
    println!("  - X/x/-/_/⬜ for gray (not in word)");
    println!("Commands: 'quit', 'new', 'undo'\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(suggestion) = assistant.suggest().cloned() else {
            println!("\n❌ No candidates remain! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");
            match prompt(&mut lines, "Command")?.as_str() {
                "undo" | "u" => {
                    assistant.undo();
                }
                "new" | "n" => assistant.reset(),
                "quit" | "q" | "exit" => return Ok(()),
                _ => {}
            }
            continue;
        };

        println!("{}", "─".repeat(60));
        println!(
            "Turn {}: {} candidates remaining",
            assistant.history().len() + 1,
            assistant.candidates().len()
        );
        if assistant.candidates().len() <= 10 {
            let names: Vec<String> = assistant
                .candidates()
                .iter()
                .map(|w| w.text().to_uppercase())
                .collect();
            println!("  {}", names.join(" ").bright_black());
        }
        println!(
            "Suggested guess: {}",
            suggestion.text().to_uppercase().bright_yellow().bold()
        );
        let groups = group_by_feedback(&suggestion, assistant.candidates());
        let ranking = assistant.rank(&suggestion);
        println!(
            "   Entropy: {:.3} bits, worst case {} candidates, {:.2} on average",
            shannon_entropy(&groups),
            ranking.worst_case,
            ranking.average(assistant.candidates().len())
        );

        let guess_input = prompt(&mut lines, "Guess played (enter for suggestion)")?;
        let guess = match guess_input.as_str() {
            "" => suggestion,
            "quit" | "q" | "exit" => return Ok(()),
            "new" | "n" => {
                assistant.reset();
                continue;
            }
            "undo" | "u" => {
                if !assistant.undo() {
                    println!("Nothing to undo!");
                }
                continue;
            }
            text => match Word::with_length(text, assistant.word_length()) {
                Ok(word) => word,
                Err(e) => {
                    println!("❌ {e}");
                    continue;
                }
            },
        };

        let feedback = loop {
            let input = prompt(&mut lines, "Feedback")?;
            match input.as_str() {
                "quit" | "q" | "exit" => return Ok(()),
                "win" | "solved" => break Feedback::solved(assistant.word_length()),
                _ => match Feedback::parse(&input, assistant.word_length()) {
                    Ok(feedback) => break feedback,
                    Err(e) => println!("❌ {e}"),
                },
            }
        };

        let solved = feedback.is_solved();
        assistant.record(guess, feedback);
        if let Some((guess, feedback)) = assistant.history().last() {
            print_assist_turn(guess, feedback, assistant.candidates().len());
        }

        if solved {
            println!(
                "\n{}",
                format!("🎉 Solved in {} guesses!", assistant.history().len())
                    .green()
                    .bold()
            );
            match prompt(&mut lines, "Play again? (yes/no)")?.as_str() {
                "yes" | "y" => assistant.reset(),
                _ => return Ok(()),
            }
        }
    }
}

/// Print `label`, then read one trimmed, lowercased line
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    match lines.next() {
        Some(line) => Ok(line.context("failed to read input")?.trim().to_lowercase()),
        None => bail!("input closed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{EntropyStrategy, MinimaxStrategy};

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn vocabulary() -> Vec<Word> {
        words(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "moist", "allot", "lysin",
        ])
    }

    #[test]
    fn opening_is_suggested_first() {
        let vocab = vocabulary();
        let assistant = Assistant::new(
            EntropyStrategy,
            &vocab,
            &vocab,
            5,
            Some(Word::new("roate").unwrap()),
        );
        assert_eq!(assistant.suggest().unwrap().text(), "roate");
    }

    #[test]
    fn feedback_narrows_candidates() {
        let vocab = vocabulary();
        let mut assistant = Assistant::new(MinimaxStrategy, &vocab, &vocab, 5, None);
        let guess = Word::new("moist").unwrap();
        let solution = Word::new("crate").unwrap();

        assistant.record(guess.clone(), Feedback::evaluate(&guess, &solution));

        assert!(assistant.candidates().contains(&solution));
        assert!(!assistant.candidates().contains(&guess));
        assert!(assistant.candidates().len() < vocab.len());
    }

    #[test]
    fn assistant_reaches_the_solution() {
        let vocab = vocabulary();
        let solution = Word::new("grate").unwrap();
        let mut assistant = Assistant::new(EntropyStrategy, &vocab, &vocab, 5, None);

        for _ in 0..2 * vocab.len() {
            let guess = assistant.suggest().unwrap().clone();
            let feedback = Feedback::evaluate(&guess, &solution);
            let solved = feedback.is_solved();
            assistant.record(guess, feedback);
            if solved {
                break;
            }
        }

        assert_eq!(assistant.candidates(), std::slice::from_ref(&solution));
        assert!(assistant.history().last().unwrap().1.is_solved());
    }

    #[test]
    fn ranking_follows_the_candidates() {
        let vocab = vocabulary();
        let mut assistant = Assistant::new(EntropyStrategy, &vocab, &vocab, 5, None);
        let guess = Word::new("crane").unwrap();

        let ranking = assistant.rank(&guess);
        let average = ranking.average(assistant.candidates().len());
        assert_eq!(ranking.best_case, 0);
        assert!(ranking.worst_case < vocab.len());
        assert!(average > 0.0 && average <= ranking.worst_case as f64);

        let solution = Word::new("grate").unwrap();
        assistant.record(solution.clone(), Feedback::solved(5));
        let solved = assistant.rank(&solution);
        assert_eq!((solved.worst_case, solved.total), (0, 0));
        assert!(solved.average(assistant.candidates().len()).abs() < f64::EPSILON);
    }

    #[test]
    fn undo_restores_previous_state() {
        let vocab = vocabulary();
        let mut assistant = Assistant::new(EntropyStrategy, &vocab, &vocab, 5, None);
        let solution = Word::new("lysin").unwrap();

        let first = Word::new("crane").unwrap();
        assistant.record(first.clone(), Feedback::evaluate(&first, &solution));
        let after_first = assistant.candidates().to_vec();

        let second = Word::new("moist").unwrap();
        assistant.record(second.clone(), Feedback::evaluate(&second, &solution));
        assert!(assistant.undo());

        assert_eq!(assistant.candidates(), after_first.as_slice());
        assert_eq!(assistant.history().len(), 1);
        assert!(assistant.undo());
        assert!(!assistant.undo());
        assert_eq!(assistant.candidates().len(), vocab.len());
    }

    #[test]
    fn contradictory_feedback_empties_candidates() {
        let vocab = vocabulary();
        let mut assistant = Assistant::new(EntropyStrategy, &vocab, &vocab, 5, None);
        let guess = Word::new("crane").unwrap();

        assistant.record(guess, Feedback::parse("XXXXX", 5).unwrap());
        let guess = Word::new("moist").unwrap();
        assistant.record(guess, Feedback::parse("XXXXX", 5).unwrap());

        assert!(assistant.candidates().is_empty());
        assert!(assistant.suggest().is_none());
    }
}
