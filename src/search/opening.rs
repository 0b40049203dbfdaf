//! Exhaustive opening evaluation
//!
//! Replays every candidate opening against every solution word and keeps the
//! opening that leaves the fewest candidates on average. Solutions are the unit
//! of parallel work; per-combination totals live in one shared atomic
//! accumulator.

use super::GuessCombination;
use crate::core::{KnowledgeState, Word, retain_possible};
use crate::error::SolverError;
use crate::solver::play_turn;
use log::{info, warn};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Finished solutions between progress reports unless configured otherwise
pub const DEFAULT_PROGRESS_INTERVAL: usize = 50;

/// A solution whose replays hit an integrity error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayFailure {
    pub solution: Word,
    pub error: SolverError,
}

/// Final result of an opening search
#[derive(Debug, Clone)]
pub struct OpeningReport {
    pub seed: Word,
    pub best: GuessCombination,
    pub average_words_left: f64,
    pub solutions_tried: usize,
    pub succeeded: usize,
    pub failures: Vec<ReplayFailure>,
    pub elapsed: Duration,
}

impl OpeningReport {
    /// The winning opening with the seed first
    #[must_use]
    pub fn opening(&self) -> Vec<&Word> {
        self.best.play_order(&self.seed)
    }

    #[must_use]
    pub fn time_per_solution(&self) -> Duration {
        u32::try_from(self.solutions_tried)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| self.elapsed / n)
    }
}

/// Point-in-time view of a running search
///
/// Read while workers are still adding to the totals, so `best` is approximate.
#[derive(Debug, Clone)]
pub struct ProgressSnapshot<'a> {
    pub finished: usize,
    pub total: usize,
    pub best: Option<(&'a GuessCombination, f64)>,
    pub elapsed: Duration,
    pub estimated_remaining: Option<Duration>,
}

/// Search over a fixed list of openings sharing one seed word
pub struct OpeningSearch<'a> {
    seed: &'a Word,
    combinations: &'a [GuessCombination],
    solutions: &'a [Word],
    progress_interval: usize,
}

impl<'a> OpeningSearch<'a> {
    /// Create a search
    ///
    /// # Parameters
    /// - `seed`: The word every combination starts with
    /// - `combinations`: Openings to evaluate, each containing `seed`
    /// - `solutions`: Every word that can be the answer
    pub const fn new(
        seed: &'a Word,
        combinations: &'a [GuessCombination],
        solutions: &'a [Word],
    ) -> Self {
        Self {
            seed,
            combinations,
            solutions,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Report progress after every `interval` finished solutions (0 disables)
    #[must_use]
    pub const fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Run the search without progress reporting
    ///
    /// # Errors
    /// See [`OpeningSearch::run_with_progress`].
    ///
    /// # Examples
    /// ```
    /// use wordle_openings::core::Word;
    /// use wordle_openings::search::{OpeningSearch, prepare_vocabulary, seeded_combinations};
    ///
    /// let solutions: Vec<Word> = ["roate", "lysin", "chump", "crane", "slate", "moist"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let seed = Word::new("roate").unwrap();
    ///
    /// let vocabulary = prepare_vocabulary(&solutions, &seed);
    /// let combinations = seeded_combinations(&vocabulary, 1, &seed).unwrap();
    ///
    /// let report = OpeningSearch::new(&seed, &combinations, &solutions).run().unwrap();
    /// assert_eq!(report.opening()[0], &seed);
    /// assert_eq!(report.succeeded, solutions.len());
    /// ```
    pub fn run(&self) -> Result<OpeningReport, SolverError> {
        self.run_with_progress(|_| {})
    }

    /// Run the search, calling `progress` periodically from worker threads
    ///
    /// A solution whose replays fail is left out of the totals and listed in
    /// the report's `failures`; the average is taken over the rest.
    ///
    /// # Errors
    /// - `EmptySearch` if there are no combinations or no solutions
    /// - `NoSuccessfulReplays` if every solution failed
    pub fn run_with_progress<F>(&self, progress: F) -> Result<OpeningReport, SolverError>
    where
        F: Fn(&ProgressSnapshot<'_>) + Sync,
    {
        if self.combinations.is_empty() || self.solutions.is_empty() {
            return Err(SolverError::EmptySearch {
                combinations: self.combinations.len(),
                solutions: self.solutions.len(),
            });
        }

        info!(
            "searching {} openings with seed {} over {} solutions",
            self.combinations.len(),
            self.seed,
            self.solutions.len()
        );

        let start = Instant::now();
        let totals: Vec<AtomicU64> = self
            .combinations
            .iter()
            .map(|_| AtomicU64::new(0))
            .collect();
        let finished = AtomicUsize::new(0);
        let succeeded = AtomicUsize::new(0);

        let failures: Vec<ReplayFailure> = self
            .solutions
            .par_iter()
            .filter_map(|solution| {
                let failure = match words_left_after_opening(
                    self.seed,
                    self.combinations,
                    self.solutions,
                    solution,
                ) {
                    Ok(counts) => {
                        for (total, count) in totals.iter().zip(counts) {
                            total.fetch_add(count as u64, Ordering::Relaxed);
                        }
                        succeeded.fetch_add(1, Ordering::Relaxed);
                        None
                    }
                    Err(error) => {
                        warn!("replay against {solution} failed: {error}");
                        Some(ReplayFailure {
                            solution: solution.clone(),
                            error,
                        })
                    }
                };

                let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
                if self.progress_interval > 0 && done % self.progress_interval == 0 {
                    progress(&self.snapshot(
                        &totals,
                        done,
                        succeeded.load(Ordering::Relaxed),
                        start.elapsed(),
                    ));
                }
                failure
            })
            .collect();

        let succeeded = succeeded.into_inner();
        if succeeded == 0 {
            return Err(SolverError::NoSuccessfulReplays(failures.len()));
        }

        let totals: Vec<u64> = totals.into_iter().map(AtomicU64::into_inner).collect();
        let Some((index, total)) = first_minimum(&totals) else {
            return Err(SolverError::EmptySearch {
                combinations: 0,
                solutions: self.solutions.len(),
            });
        };

        let report = OpeningReport {
            seed: self.seed.clone(),
            best: self.combinations[index].clone(),
            average_words_left: total as f64 / succeeded as f64,
            solutions_tried: self.solutions.len(),
            succeeded,
            failures,
            elapsed: start.elapsed(),
        };

        info!(
            "best opening for seed {}: {} ({:.3} words left on average, {} failed)",
            report.seed,
            report.best,
            report.average_words_left,
            report.failures.len()
        );
        Ok(report)
    }

    fn snapshot(
        &self,
        totals: &[AtomicU64],
        finished: usize,
        succeeded: usize,
        elapsed: Duration,
    ) -> ProgressSnapshot<'a> {
        let current: Vec<u64> = totals.iter().map(|t| t.load(Ordering::Relaxed)).collect();
        let best = first_minimum(&current)
            .filter(|_| succeeded > 0)
            .map(|(index, total)| (&self.combinations[index], total as f64 / succeeded as f64));

        let total = self.solutions.len();
        let estimated_remaining = u32::try_from(finished)
            .ok()
            .filter(|&n| n > 0)
            .and_then(|n| {
                let left = u32::try_from(total - finished).ok()?;
                Some(elapsed / n * left)
            });

        ProgressSnapshot {
            finished,
            total,
            best,
            elapsed,
            estimated_remaining,
        }
    }
}

/// Index and value of the first smallest total
fn first_minimum(totals: &[u64]) -> Option<(usize, u64)> {
    let mut best: Option<(usize, u64)> = None;
    for (index, &total) in totals.iter().enumerate() {
        if best.is_none_or(|(_, low)| total < low) {
            best = Some((index, total));
        }
    }
    best
}

/// Words left after each opening when `solution` is the answer
///
/// The seed is played once and its filtered state is shared; every
/// combination then replays its other words on its own copy. A combination
/// containing `solution` solves the game and leaves 0.
///
/// # Errors
/// - `LengthMismatch` if `solution` differs in length from `seed` or from a
///   combination word that has to be played
/// - `VocabularyExhausted` / `AnswerUnreachable` if filtering loses `solution`
pub fn words_left_after_opening(
    seed: &Word,
    combinations: &[GuessCombination],
    solutions: &[Word],
    solution: &Word,
) -> Result<Vec<usize>, SolverError> {
    if solution.len() != seed.len() {
        return Err(SolverError::LengthMismatch {
            word: solution.text().to_string(),
            expected: seed.len(),
            actual: solution.len(),
        });
    }

    if seed == solution {
        return Ok(vec![0; combinations.len()]);
    }

    let mut seeded = KnowledgeState::new(seed.len());
    let mut candidates: Vec<&Word> = solutions.iter().filter(|w| *w != seed).collect();
    play_turn(&mut seeded, seed, solution);
    retain_possible(&mut candidates, &seeded, false);
    check_integrity(&candidates, solution, seed)?;

    combinations
        .iter()
        .map(|combination| {
            if combination.contains(solution) {
                return Ok(0);
            }

            let mut state = seeded.clone();
            let mut left = candidates.clone();
            for guess in combination.words().iter().filter(|w| *w != seed) {
                if guess.len() != solution.len() {
                    return Err(SolverError::LengthMismatch {
                        word: guess.text().to_string(),
                        expected: solution.len(),
                        actual: guess.len(),
                    });
                }
                play_turn(&mut state, guess, solution);
                left.retain(|w| *w != guess);
                retain_possible(&mut left, &state, false);
                check_integrity(&left, solution, guess)?;
            }
            Ok(left.len())
        })
        .collect()
}

fn check_integrity(candidates: &[&Word], solution: &Word, guess: &Word) -> Result<(), SolverError> {
    if candidates.is_empty() {
        return Err(SolverError::VocabularyExhausted {
            solution: solution.text().to_string(),
            guess: guess.text().to_string(),
        });
    }
    if !candidates.contains(&solution) {
        return Err(SolverError::AnswerUnreachable {
            solution: solution.text().to_string(),
            guess: guess.text().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{prepare_vocabulary, seeded_combinations};
    use std::sync::Mutex;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn toy_solutions() -> Vec<Word> {
        words(&[
            "roate", "lysin", "chump", "ducks", "swing", "glyph", "chunk", "jumps", "blind",
            "vinyl", "crane", "slate", "irate", "crate", "grate", "trace", "moist", "tulip",
            "plate", "brine",
        ])
    }

    /// Straight sequential replay of one opening, sharing nothing with the search
    fn brute_force_average(seed: &Word, combination: &GuessCombination, solutions: &[Word]) -> f64 {
        let mut total = 0u64;
        for solution in solutions {
            let mut state = KnowledgeState::new(5);
            let mut candidates = solutions.to_vec();
            let mut left = None;

            for guess in combination.play_order(seed) {
                if guess == solution {
                    left = Some(0);
                    break;
                }
                play_turn(&mut state, guess, solution);
                candidates.retain(|w| w != guess);
                retain_possible(&mut candidates, &state, false);
            }
            total += left.unwrap_or(candidates.len()) as u64;
        }
        total as f64 / solutions.len() as f64
    }

    #[test]
    fn best_opening_beats_every_other() {
        let solutions = toy_solutions();
        let seed = Word::new("roate").unwrap();
        let combinations =
            seeded_combinations(&prepare_vocabulary(&solutions, &seed), 2, &seed).unwrap();
        assert!(combinations.len() > 1);

        let report = OpeningSearch::new(&seed, &combinations, &solutions)
            .run()
            .unwrap();

        let averages: Vec<f64> = combinations
            .iter()
            .map(|c| brute_force_average(&seed, c, &solutions))
            .collect();
        for average in &averages {
            assert!(report.average_words_left <= *average);
        }

        let first_best = averages
            .iter()
            .position(|a| *a == report.average_words_left)
            .unwrap();
        assert_eq!(report.best, combinations[first_best]);
        assert_eq!(report.succeeded, solutions.len());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn solved_openings_leave_nothing() {
        let solutions = toy_solutions();
        let seed = Word::new("roate").unwrap();
        let combinations = vec![GuessCombination::new(words(&["roate", "lysin", "chump"]))];

        let seed_hit = words_left_after_opening(&seed, &combinations, &solutions, &seed).unwrap();
        assert_eq!(seed_hit, vec![0]);

        let member_hit =
            words_left_after_opening(&seed, &combinations, &solutions, &solutions[2]).unwrap();
        assert_eq!(member_hit, vec![0]);
    }

    #[test]
    fn words_left_never_counts_played_words() {
        let solutions = toy_solutions();
        let seed = Word::new("roate").unwrap();
        let combination = GuessCombination::new(words(&["roate", "lysin", "chump"]));
        let solution = Word::new("crane").unwrap();

        let left = words_left_after_opening(
            &seed,
            std::slice::from_ref(&combination),
            &solutions,
            &solution,
        )
        .unwrap();

        assert!(left[0] >= 1); // CRANE itself always survives
        assert!(left[0] <= solutions.len() - combination.len());
    }

    #[test]
    fn unknown_answer_is_an_integrity_error() {
        let solutions = toy_solutions();
        let seed = Word::new("roate").unwrap();
        let combinations = vec![GuessCombination::new(words(&["roate", "lysin"]))];

        let error = words_left_after_opening(
            &seed,
            &combinations,
            &solutions,
            &Word::new("quirk").unwrap(),
        )
        .unwrap_err();

        assert!(matches!(
            error,
            SolverError::AnswerUnreachable { .. } | SolverError::VocabularyExhausted { .. }
        ));
    }

    #[test]
    fn failed_solutions_are_reported_not_fatal() {
        let mut solutions = toy_solutions();
        solutions.push(Word::new("cranes").unwrap());
        let seed = Word::new("roate").unwrap();
        let combinations = vec![
            GuessCombination::new(words(&["roate", "lysin"])),
            GuessCombination::new(words(&["roate", "chump"])),
        ];

        let report = OpeningSearch::new(&seed, &combinations, &solutions)
            .run()
            .unwrap();

        assert_eq!(report.solutions_tried, solutions.len());
        assert_eq!(report.succeeded, solutions.len() - 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].solution.text(), "cranes");
        assert!(matches!(
            report.failures[0].error,
            SolverError::LengthMismatch { expected: 5, actual: 6, .. }
        ));
    }

    #[test]
    fn mixed_length_opening_fails_per_solution() {
        let solutions = toy_solutions();
        let seed = Word::new("roate").unwrap();
        let combinations = vec![GuessCombination::new(words(&["roate", "lysinx", "chump"]))];

        let error =
            words_left_after_opening(&seed, &combinations, &solutions, &solutions[10]).unwrap_err();
        assert_eq!(
            error,
            SolverError::LengthMismatch {
                word: "lysinx".to_string(),
                expected: 5,
                actual: 6
            }
        );

        // ROATE and CHUMP are solved before LYSINX would be played
        let report = OpeningSearch::new(&seed, &combinations, &solutions)
            .run()
            .unwrap();
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failures.len(), solutions.len() - 2);
        assert!(report.failures.iter().all(|f| matches!(
            f.error,
            SolverError::LengthMismatch { expected: 5, actual: 6, .. }
        )));
    }

    #[test]
    fn default_progress_interval_is_shared() {
        assert_eq!(
            crate::search::SearchConfig::default().progress_interval,
            DEFAULT_PROGRESS_INTERVAL
        );
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let seed = Word::new("roate").unwrap();
        let solutions = toy_solutions();

        assert_eq!(
            OpeningSearch::new(&seed, &[], &solutions).run().unwrap_err(),
            SolverError::EmptySearch {
                combinations: 0,
                solutions: solutions.len()
            }
        );
    }

    #[test]
    fn all_failures_is_an_error() {
        let seed = Word::new("roate").unwrap();
        let solutions = words(&["cranes", "slates"]);
        let combinations = vec![GuessCombination::new([seed.clone()])];

        assert_eq!(
            OpeningSearch::new(&seed, &combinations, &solutions)
                .run()
                .unwrap_err(),
            SolverError::NoSuccessfulReplays(2)
        );
    }

    #[test]
    fn progress_is_reported_at_each_interval() {
        let solutions = toy_solutions();
        let seed = Word::new("roate").unwrap();
        let combinations =
            seeded_combinations(&prepare_vocabulary(&solutions, &seed), 1, &seed).unwrap();
        let seen = Mutex::new(Vec::new());

        OpeningSearch::new(&seed, &combinations, &solutions)
            .with_progress_interval(5)
            .run_with_progress(|snapshot| {
                assert_eq!(snapshot.total, solutions.len());
                assert!(snapshot.best.is_some());
                seen.lock().unwrap().push(snapshot.finished);
            })
            .unwrap();

        let mut seen = seen.into_inner().unwrap();
        seen.sort_unstable();
        assert_eq!(seen, vec![5, 10, 15, 20]);
    }

    #[test]
    fn report_helpers() {
        let seed = Word::new("roate").unwrap();
        let report = OpeningReport {
            seed: seed.clone(),
            best: GuessCombination::new(words(&["roate", "chump", "lysin"])),
            average_words_left: 1.5,
            solutions_tried: 4,
            succeeded: 4,
            failures: Vec::new(),
            elapsed: Duration::from_secs(2),
        };

        let opening: Vec<&str> = report.opening().into_iter().map(Word::text).collect();
        assert_eq!(opening, vec!["roate", "chump", "lysin"]);
        assert_eq!(report.time_per_solution(), Duration::from_millis(500));
    }
}
