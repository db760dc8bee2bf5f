use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::HangmanError;

/// Wrong guesses tolerated before the round is lost.
pub const MISTAKE_LIMIT: u8 = 3;

/// Number of gallows stages: one per mistake count, `0..=MISTAKE_LIMIT`.
pub const SCORE_STEPS: u8 = MISTAKE_LIMIT + 1;

/// Placeholder shown for a letter that has not been guessed yet.
pub const BLANK: char = '_';

/// One `WORD~hint` line of a word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    word: String,
    hint: String,
}

impl WordEntry {
    /// Trims both fields. Returns `None` when the word is empty.
    pub fn new(word: impl AsRef<str>, hint: impl AsRef<str>) -> Option<Self> {
        let word = word.as_ref().trim();
        if word.is_empty() {
            return None;
        }
        Some(Self {
            word: word.to_string(),
            hint: hint.as_ref().trim().to_string(),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// How [`GameEngine::reset_round`] picks the next answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMode {
    /// "Retry": same answer and hint.
    SameWord,
    /// "Next": draw again from the loaded entries.
    NextWord,
}

impl From<bool> for ResetMode {
    fn from(keep_same_word: bool) -> Self {
        if keep_same_word {
            ResetMode::SameWord
        } else {
            ResetMode::NextWord
        }
    }
}

/// Snapshot of a single round. Every transition produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    answer: String,
    hint: String,
    guessed: BTreeSet<char>,
    mistakes: u8,
    outcome: Outcome,
}

impl RoundState {
    /// A word with nothing to guess (e.g. `42`) starts out won.
    pub fn new(entry: &WordEntry) -> Self {
        Self::fresh(entry.word.to_uppercase(), entry.hint.clone())
    }

    fn fresh(answer: String, hint: String) -> Self {
        let mut round = Self {
            answer,
            hint,
            guessed: BTreeSet::new(),
            mistakes: 0,
            outcome: Outcome::InProgress,
        };
        if round.is_complete() {
            round.outcome = Outcome::Won;
        }
        round
    }

    /// Apply one guess and return the resulting snapshot.
    ///
    /// Repeated letters and guesses after the round is over return an identical snapshot.
    pub fn guess(&self, letter: char) -> Result<Self, HangmanError> {
        let letter = normalize(letter).ok_or(HangmanError::InvalidInput(letter))?;

        if self.outcome.is_over() || self.guessed.contains(&letter) {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        next.guessed.insert(letter);

        if next.answer.contains(letter) {
            if next.is_complete() {
                next.outcome = Outcome::Won;
            }
        } else {
            next.mistakes = next.mistakes.saturating_add(1);
            if next.mistakes >= MISTAKE_LIMIT {
                next.outcome = Outcome::Lost;
            }
        }

        Ok(next)
    }

    /// Same answer and hint, nothing guessed.
    pub fn restart(&self) -> Self {
        Self::fresh(self.answer.clone(), self.hint.clone())
    }

    /// What the player sees. A lost round shows the whole answer.
    pub fn reveal(&self) -> Vec<char> {
        match self.outcome {
            Outcome::Lost => self.answer.chars().collect(),
            _ => compute_reveal(&self.answer, &self.guessed),
        }
    }

    fn is_complete(&self) -> bool {
        self.answer
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| self.guessed.contains(&c))
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        normalize(letter).is_some_and(|l| self.guessed.contains(&l))
    }

    /// Whether `letter` occurs in the answer, ignoring case.
    pub fn contains(&self, letter: char) -> bool {
        normalize(letter).is_some_and(|l| self.answer.contains(l))
    }

    pub fn mistakes(&self) -> u8 {
        self.mistakes
    }

    pub fn mistakes_remaining(&self) -> u8 {
        MISTAKE_LIMIT.saturating_sub(self.mistakes)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// For each character of `answer`: the character if guessed, otherwise [`BLANK`].
///
/// Characters that cannot be guessed (spaces, hyphens, digits) are always shown.
pub fn compute_reveal(answer: &str, guessed: &BTreeSet<char>) -> Vec<char> {
    answer
        .chars()
        .map(|c| {
            if !c.is_alphabetic() || guessed.contains(&c) {
                c
            } else {
                BLANK
            }
        })
        .collect()
}

fn normalize(letter: char) -> Option<char> {
    if !letter.is_alphabetic() {
        return None;
    }
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => Some(letter),
    }
}

/// Owns the loaded word list, the random source and the current round.
#[derive(Debug)]
pub struct GameEngine<R = StdRng> {
    entries: Vec<WordEntry>,
    round: Option<RoundState>,
    rng: R,
}

impl GameEngine<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn new(rng: R) -> Self {
        Self {
            entries: Vec::new(),
            round: None,
            rng,
        }
    }

    /// Replace the word list and draw a word from it.
    pub fn start_round(&mut self, entries: Vec<WordEntry>) -> Result<&RoundState, HangmanError> {
        if entries.is_empty() {
            self.entries.clear();
            self.round = None;
            return Err(HangmanError::NoWordsAvailable { category: None });
        }
        self.entries = entries;
        self.draw()
    }

    pub fn guess(&mut self, letter: char) -> Result<&RoundState, HangmanError> {
        let current = self.round.as_ref().ok_or(HangmanError::NoActiveRound)?;
        let next = current.guess(letter)?;

        if next != *current {
            debug!(letter = %letter, mistakes = next.mistakes, outcome = ?next.outcome, "guess applied");
            match next.outcome {
                Outcome::Won => info!(answer = %next.answer, "round won"),
                Outcome::Lost => info!(answer = %next.answer, "round lost"),
                Outcome::InProgress => {}
            }
        }

        Ok(self.round.insert(next))
    }

    pub fn reset_round(&mut self, mode: impl Into<ResetMode>) -> Result<&RoundState, HangmanError> {
        match mode.into() {
            ResetMode::SameWord => {
                let fresh = self
                    .round
                    .as_ref()
                    .ok_or(HangmanError::NoActiveRound)?
                    .restart();
                info!(answer = %fresh.answer, "round retried");
                Ok(self.round.insert(fresh))
            }
            ResetMode::NextWord => {
                if self.entries.is_empty() {
                    return Err(HangmanError::NoWordsAvailable { category: None });
                }
                self.draw()
            }
        }
    }

    /// Drop the current round, e.g. when leaving the game screen.
    pub fn end_round(&mut self) {
        self.round = None;
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    fn draw(&mut self) -> Result<&RoundState, HangmanError> {
        let index = self.rng.random_range(0..self.entries.len());
        let round = RoundState::new(&self.entries[index]);
        info!(index, total = self.entries.len(), "round started");
        Ok(self.round.insert(round))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(word: &str, hint: &str) -> WordEntry {
        WordEntry::new(word, hint).unwrap()
    }

    fn round(word: &str) -> RoundState {
        RoundState::new(&entry(word, "hint"))
    }

    fn shown(state: &RoundState) -> String {
        state.reveal().iter().map(char::to_string).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn cat_is_won_letter_by_letter() {
        let mut state = round("cat");
        assert_eq!(state.answer(), "CAT");
        assert_eq!(shown(&state), "_ _ _");

        let mut reveals = Vec::new();
        for letter in ['C', 'A', 'T'] {
            state = state.guess(letter).unwrap();
            reveals.push(shown(&state));
        }

        assert_eq!(reveals, vec!["C _ _", "C A _", "C A T"]);
        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.mistakes(), 0);
    }

    #[test]
    fn dog_is_lost_and_fully_revealed() {
        let mut state = round("DOG");
        let mut mistakes = Vec::new();
        for letter in ['X', 'Y', 'Z'] {
            assert_eq!(state.outcome(), Outcome::InProgress);
            state = state.guess(letter).unwrap();
            mistakes.push(state.mistakes());
        }

        assert_eq!(mistakes, vec![1, 2, 3]);
        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(shown(&state), "D O G");
        assert_eq!(state.mistakes_remaining(), 0);
    }

    #[test]
    fn won_reveal_only_uses_guessed_letters() {
        let state = round("AB").guess('a').unwrap();
        assert_eq!(state.reveal(), vec!['A', BLANK]);
        assert!(state.has_guessed('a'));
        assert!(state.contains('b'));
        assert!(!state.contains('z'));
    }

    #[test]
    fn lowercase_guesses_are_normalized() {
        let state = round("Cat").guess('c').unwrap();
        assert!(state.guessed().contains(&'C'));
        assert_eq!(state.reveal(), vec!['C', BLANK, BLANK]);
    }

    #[test]
    fn invalid_input_is_rejected() {
        let state = round("CAT");
        for bad in ['1', ' ', '~', '!'] {
            assert!(matches!(state.guess(bad), Err(HangmanError::InvalidInput(c)) if c == bad));
        }
    }

    #[test]
    fn repeated_guess_changes_nothing() {
        let once = round("CAT").guess('Q').unwrap();
        let twice = once.guess('q').unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.mistakes(), 1);
    }

    #[test]
    fn guesses_after_the_end_are_ignored() {
        let won = round("A").guess('A').unwrap();
        assert_eq!(won.outcome(), Outcome::Won);
        assert_eq!(won.guess('B').unwrap(), won);

        let lost = round("A").guess('X').unwrap().guess('Y').unwrap().guess('Z').unwrap();
        assert_eq!(lost.guess('A').unwrap(), lost);
    }

    #[test]
    fn non_letters_in_the_answer_are_always_shown() {
        let state = round("ice-cream");
        assert_eq!(state.reveal().iter().collect::<String>(), "___-_____");

        let mut state = state;
        for letter in "ICERAM".chars() {
            state = state.guess(letter).unwrap();
        }
        assert_eq!(state.outcome(), Outcome::Won);
    }

    #[test]
    fn word_entries_need_a_word() {
        assert!(WordEntry::new("  ", "hint").is_none());
        assert_eq!(WordEntry::new("42", "hint").unwrap().word(), "42");
        assert_eq!(WordEntry::new(" owl ", " wise ").unwrap().hint(), "wise");
    }

    #[test]
    fn word_without_letters_starts_won() {
        let state = round("42");
        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.reveal(), vec!['4', '2']);
        assert_eq!(state.guess('A').unwrap(), state);
        assert_eq!(state.restart().outcome(), Outcome::Won);

        let mut engine = GameEngine::seeded(2);
        let started = engine.start_round(vec![entry("42", "the answer")]).unwrap();
        assert_eq!(started.outcome(), Outcome::Won);
    }

    #[test]
    fn out_of_range_snapshot_does_not_overflow() {
        let json = r#"{"answer":"CAT","hint":"pet","guessed":[],"mistakes":255,"outcome":"InProgress"}"#;
        let state: RoundState = serde_json::from_str(json).unwrap();

        let next = state.guess('Z').unwrap();
        assert_eq!(next.mistakes(), u8::MAX);
        assert_eq!(next.outcome(), Outcome::Lost);
        assert_eq!(next.mistakes_remaining(), 0);
    }

    #[test]
    fn start_round_with_no_entries_signals_no_words() {
        let mut engine = GameEngine::seeded(7);
        assert!(matches!(
            engine.start_round(Vec::new()),
            Err(HangmanError::NoWordsAvailable { .. })
        ));
        assert!(engine.round().is_none());
        assert!(matches!(engine.guess('A'), Err(HangmanError::NoActiveRound)));
    }

    #[test]
    fn start_round_uppercases_and_resets() {
        let mut engine = GameEngine::seeded(7);
        let state = engine.start_round(vec![entry("cat", "a small pet")]).unwrap();
        assert_eq!(state.answer(), "CAT");
        assert_eq!(state.hint(), "a small pet");
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert!(state.guessed().is_empty());
    }

    #[test]
    fn engine_rejects_invalid_input_without_mutation() {
        let mut engine = GameEngine::seeded(1);
        engine.start_round(vec![entry("cat", "pet")]).unwrap();
        engine.guess('x').unwrap();
        let before = engine.round().cloned();

        assert!(engine.guess('7').is_err());
        assert_eq!(engine.round().cloned(), before);
    }

    #[test]
    fn retry_keeps_the_word_and_clears_progress() {
        let mut engine = GameEngine::seeded(3);
        engine.start_round(vec![entry("dog", "barks"), entry("cat", "meows")]).unwrap();
        let answer = engine.round().unwrap().answer().to_string();

        for letter in ['Q', 'W', 'J'] {
            engine.guess(letter).unwrap();
        }
        assert_eq!(engine.round().unwrap().outcome(), Outcome::Lost);

        let state = engine.reset_round(ResetMode::SameWord).unwrap();
        assert_eq!(state.answer(), answer);
        assert_eq!(state.mistakes(), 0);
        assert!(state.guessed().is_empty());
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn next_word_draws_from_loaded_entries() {
        let words = ["ant", "bee", "cow", "doe", "eel"];
        let mut engine = GameEngine::seeded(11);
        engine
            .start_round(words.iter().map(|w| entry(w, "animal")).collect())
            .unwrap();

        let mut seen = BTreeSet::new();
        for _ in 0..50 {
            let state = engine.reset_round(false).unwrap();
            assert_eq!(state.outcome(), Outcome::InProgress);
            assert!(state.guessed().is_empty());
            seen.insert(state.answer().to_lowercase());
        }
        assert!(seen.iter().all(|w| words.contains(&w.as_str())));
        assert!(seen.len() > 1);
    }

    #[test]
    fn reset_without_round_fails() {
        let mut engine = GameEngine::seeded(0);
        assert!(matches!(engine.reset_round(true), Err(HangmanError::NoActiveRound)));
        assert!(matches!(
            engine.reset_round(ResetMode::NextWord),
            Err(HangmanError::NoWordsAvailable { .. })
        ));
    }

    #[test]
    fn same_seed_same_words() {
        let entries: Vec<_> = ["one", "two", "three", "four"].iter().map(|w| entry(w, "n")).collect();
        let mut a = GameEngine::seeded(99);
        let mut b = GameEngine::seeded(99);
        a.start_round(entries.clone()).unwrap();
        b.start_round(entries).unwrap();
        for _ in 0..10 {
            assert_eq!(
                a.reset_round(ResetMode::NextWord).unwrap().answer(),
                b.reset_round(ResetMode::NextWord).unwrap().answer()
            );
        }
    }

    #[test]
    fn end_round_discards_state() {
        let mut engine = GameEngine::seeded(5);
        engine.start_round(vec![entry("owl", "hoots")]).unwrap();
        engine.end_round();
        assert!(engine.round().is_none());
        assert_eq!(engine.entries().len(), 1);
    }

    #[test]
    fn snapshot_serializes() {
        let state = round("cat").guess('c').unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: RoundState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    fn guesses() -> impl Strategy<Value = Vec<char>> {
        prop::collection::vec(prop::char::range('A', 'Z'), 0..30)
    }

    proptest! {
        #[test]
        fn mistakes_track_wrong_letters(answer in "[A-Z]{1,10}", letters in guesses()) {
            let mut state = round(&answer);
            for letter in letters {
                state = state.guess(letter).unwrap();
                let wrong = state.guessed().iter().filter(|c| !answer.contains(**c)).count();
                prop_assert_eq!(state.mistakes() as usize, wrong);
                prop_assert!(state.mistakes() <= MISTAKE_LIMIT);
            }
        }

        #[test]
        fn outcome_matches_progress(answer in "[A-Z]{1,10}", letters in guesses()) {
            let mut state = round(&answer);
            for letter in letters {
                let before = state.clone();
                state = state.guess(letter).unwrap();

                if before.outcome().is_over() {
                    prop_assert_eq!(&state, &before);
                    continue;
                }
                let complete = answer.chars().all(|c| state.guessed().contains(&c));
                prop_assert_eq!(state.outcome() == Outcome::Won, complete);
                prop_assert_eq!(state.outcome() == Outcome::Lost, state.mistakes() == MISTAKE_LIMIT);
            }
        }

        #[test]
        fn repeating_a_guess_is_idempotent(answer in "[A-Z]{1,10}", letters in guesses(), letter in prop::char::range('A', 'Z')) {
            let mut state = round(&answer);
            for l in letters {
                state = state.guess(l).unwrap();
            }
            let once = state.guess(letter).unwrap();
            let twice = once.guess(letter).unwrap();
            prop_assert_eq!(once.mistakes(), twice.mistakes());
            prop_assert_eq!(once.guessed().len(), twice.guessed().len());
            prop_assert_eq!(once.outcome(), twice.outcome());
        }
    }
}
