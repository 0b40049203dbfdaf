//! Candidate filtering against a knowledge state

use super::{KnowledgeState, Word};

/// Collect the words consistent with `state`
///
/// Preserves the input order. Linear in the total number of letters scanned.
///
/// # Examples
/// ```
/// use wordle_openings::core::{Feedback, KnowledgeState, Word, filter_candidates};
///
/// let words: Vec<Word> = ["crane", "crust", "trust"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let guess = Word::new("crane").unwrap();
/// let mut state = KnowledgeState::new(5);
/// state.update(&guess, &Feedback::evaluate(&guess, &words[1]));
///
/// let left = filter_candidates(&state, &words, false);
/// assert_eq!(left, vec![&words[1]]);
/// ```
#[must_use]
pub fn filter_candidates<'a, I>(
    state: &KnowledgeState,
    words: I,
    exclude_yellows: bool,
) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .filter(|word| state.is_possible(word, exclude_yellows))
        .collect()
}

/// Drop the words inconsistent with `state`, in place
pub fn retain_possible<W>(words: &mut Vec<W>, state: &KnowledgeState, exclude_yellows: bool)
where
    W: AsRef<Word>,
{
    words.retain(|word| state.is_possible(word.as_ref(), exclude_yellows));
}

/// Count the words consistent with `state` without collecting them
#[must_use]
pub fn count_possible<'a, I>(state: &KnowledgeState, words: I, exclude_yellows: bool) -> usize
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .filter(|word| state.is_possible(word, exclude_yellows))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn vocabulary() -> Vec<Word> {
        words(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "allot", "atoll", "apple",
            "moist", "lysin", "tulip",
        ])
    }

    fn play(state: &mut KnowledgeState, guess: &str, solution: &str) {
        let (guess, solution) = (Word::new(guess).unwrap(), Word::new(solution).unwrap());
        state.update(&guess, &Feedback::evaluate(&guess, &solution));
    }

    #[test]
    fn filter_keeps_only_consistent_words() {
        let vocab = vocabulary();
        let mut state = KnowledgeState::new(5);
        play(&mut state, "crane", "grate");

        let left = filter_candidates(&state, &vocab, false);
        assert!(left.iter().any(|w| w.text() == "grate"));
        assert!(left.iter().all(|w| state.is_possible(w, false)));
        assert!(!left.iter().any(|w| w.text() == "crane"));
    }

    #[test]
    fn refiltering_is_idempotent() {
        let vocab = vocabulary();
        let mut state = KnowledgeState::new(5);
        play(&mut state, "slate", "atoll");

        for exclude in [false, true] {
            let once = filter_candidates(&state, &vocab, exclude);
            let twice = filter_candidates(&state, once.iter().copied(), exclude);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn counts_never_increase_with_more_feedback() {
        let vocab = vocabulary();
        let mut state = KnowledgeState::new(5);
        let mut previous = count_possible(&state, &vocab, false);

        for guess in ["crane", "moist", "apple", "tulip"] {
            play(&mut state, guess, "allot");
            let count = count_possible(&state, &vocab, false);
            assert!(count <= previous);
            previous = count;
        }
        assert!(previous >= 1); // the solution itself always survives
    }

    #[test]
    fn retain_matches_filter() {
        let vocab = vocabulary();
        let mut state = KnowledgeState::new(5);
        play(&mut state, "trace", "crate");

        let expected: Vec<Word> = filter_candidates(&state, &vocab, true)
            .into_iter()
            .cloned()
            .collect();

        let mut owned = vocab.clone();
        retain_possible(&mut owned, &state, true);
        assert_eq!(owned, expected);

        let mut refs: Vec<&Word> = vocab.iter().collect();
        retain_possible(&mut refs, &state, true);
        assert_eq!(refs.len(), expected.len());
    }

    #[test]
    fn count_matches_filter_len() {
        let vocab = vocabulary();
        let mut state = KnowledgeState::new(5);
        play(&mut state, "lysin", "tulip");

        assert_eq!(
            count_possible(&state, &vocab, false),
            filter_candidates(&state, &vocab, false).len()
        );
    }
}
