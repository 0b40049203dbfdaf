//! Turn-by-turn game driver
//!
//! Evaluates a guess, folds the feedback into the knowledge state, filters the
//! candidates, and asks the strategy for the next guess until solved.

use super::strategy::Strategy;
use crate::core::{Feedback, KnowledgeState, Word, retain_possible};
use crate::error::SolverError;
use log::debug;

/// Evaluate `guess` against `solution` and fold the feedback into `state`
///
/// Usable both in simulation and to replay feedback a player typed in.
pub fn play_turn(state: &mut KnowledgeState, guess: &Word, solution: &Word) -> Feedback {
    let feedback = Feedback::evaluate(guess, solution);
    state.update(guess, &feedback);
    feedback
}

/// Game settings
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed first guess; the strategy chooses when `None`
    pub opening: Option<Word>,
    pub max_turns: usize,
    /// Also filter the guess pool after each turn (yellow-aware)
    pub prune_guess_pool: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opening: None,
            max_turns: 20,
            prune_guess_pool: false,
        }
    }
}

/// One played turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    /// Candidate solutions remaining after this turn
    pub words_left: usize,
}

/// Complete record of a solved game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub solution: Word,
    pub turns: Vec<Turn>,
}

impl GameRecord {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn guesses(&self) -> Vec<&Word> {
        self.turns.iter().map(|t| &t.guess).collect()
    }
}

/// Plays games with a given strategy and word lists
pub struct GamePlayer<'a, S: Strategy> {
    strategy: S,
    guess_pool: &'a [Word],
    solutions: &'a [Word],
    config: GameConfig,
}

impl<'a, S: Strategy> GamePlayer<'a, S> {
    /// Create a new player
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `guess_pool`: All valid guessable words
    /// - `solutions`: Words that can be solutions
    pub fn new(strategy: S, guess_pool: &'a [Word], solutions: &'a [Word]) -> Self {
        Self {
            strategy,
            guess_pool,
            solutions,
            config: GameConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play one game against `solution`
    ///
    /// Played guesses are removed from both the guess pool and the candidates.
    ///
    /// # Errors
    /// - `UnknownSolution` / `LengthMismatch` if `solution` is not a valid target
    /// - `VocabularyExhausted` / `AnswerUnreachable` on an integrity failure
    /// - `EmptyGuessPool` if the strategy has nothing left to guess
    /// - `TurnLimitExceeded` after `max_turns` unsolved turns
    ///
    /// # Examples
    /// ```
    /// use wordle_openings::core::Word;
    /// use wordle_openings::solver::{EntropyStrategy, GamePlayer};
    ///
    /// let words: Vec<Word> = ["crane", "slate", "irate", "crate", "grate"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let player = GamePlayer::new(EntropyStrategy, &words, &words);
    /// let record = player.play(&words[3]).unwrap();
    ///
    /// assert_eq!(record.turns.last().unwrap().guess, words[3]);
    /// ```
    pub fn play(&self, solution: &Word) -> Result<GameRecord, SolverError> {
        if !self.solutions.contains(solution) {
            return Err(SolverError::UnknownSolution(solution.text().to_string()));
        }

        let mut state = KnowledgeState::new(solution.len());
        let mut guesses: Vec<Word> = self.guess_pool.to_vec();
        let mut candidates: Vec<Word> = self.solutions.to_vec();
        let mut turns = Vec::new();

        let mut guess = match &self.config.opening {
            Some(opening) => opening.clone(),
            None => self.next_guess(&guesses, &candidates, &state)?,
        };

        loop {
            if guess.len() != solution.len() {
                return Err(SolverError::LengthMismatch {
                    word: guess.text().to_string(),
                    expected: solution.len(),
                    actual: guess.len(),
                });
            }

            let feedback = play_turn(&mut state, &guess, solution);
            guesses.retain(|w| *w != guess);
            candidates.retain(|w| *w != guess);

            if guess == *solution {
                debug!("{}: solved in {} turns", solution, turns.len() + 1);
                turns.push(Turn {
                    guess,
                    feedback,
                    words_left: 0,
                });
                return Ok(GameRecord {
                    solution: solution.clone(),
                    turns,
                });
            }

            retain_possible(&mut candidates, &state, false);
            if self.config.prune_guess_pool {
                retain_possible(&mut guesses, &state, true);
            }
            debug!(
                "{}: {} -> {} ({} words left)",
                solution,
                guess,
                feedback,
                candidates.len()
            );

            if candidates.is_empty() {
                return Err(SolverError::VocabularyExhausted {
                    solution: solution.text().to_string(),
                    guess: guess.text().to_string(),
                });
            }
            if !candidates.contains(solution) {
                return Err(SolverError::AnswerUnreachable {
                    solution: solution.text().to_string(),
                    guess: guess.text().to_string(),
                });
            }

            turns.push(Turn {
                guess,
                feedback,
                words_left: candidates.len(),
            });
            if turns.len() >= self.config.max_turns {
                return Err(SolverError::TurnLimitExceeded {
                    solution: solution.text().to_string(),
                    turns: turns.len(),
                });
            }

            guess = self.next_guess(&guesses, &candidates, &state)?;
        }
    }

    /// Ask the strategy for a guess
    ///
    /// Falls back to guessing among the candidates once the guess pool is used up.
    pub fn next_guess(
        &self,
        guesses: &[Word],
        candidates: &[Word],
        state: &KnowledgeState,
    ) -> Result<Word, SolverError> {
        let pool = if guesses.is_empty() { candidates } else { guesses };
        self.strategy
            .select_guess(pool, candidates, state)
            .cloned()
            .ok_or(SolverError::EmptyGuessPool)
    }
}
