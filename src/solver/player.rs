//! Consistency-filtering player

use crate::core::{Guess, Locator, Passage, RowFeedback};
use crate::engine::{GameSession, RevealMode, scoring::score_guess};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// True if `candidate` would have produced every observed feedback
#[must_use]
pub fn is_consistent(candidate: &Locator, history: &[(Guess, RowFeedback)]) -> bool {
    history
        .iter()
        .all(|(guess, feedback)| score_guess(guess, candidate) == *feedback)
}

/// Outcome of one automatically played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRecord {
    pub target: Locator,
    pub guesses: Vec<Guess>,
    pub won: bool,
}

/// Player that guesses among the locators still consistent with the feedback
pub struct AutoPlayer<'a> {
    candidates: &'a [Locator],
}

impl<'a> AutoPlayer<'a> {
    #[must_use]
    pub const fn new(candidates: &'a [Locator]) -> Self {
        Self { candidates }
    }

    /// Locators consistent with the guess history
    #[must_use]
    pub fn filter_candidates(&self, history: &[(Guess, RowFeedback)]) -> Vec<&'a Locator> {
        self.candidates
            .iter()
            .filter(|c| is_consistent(c, history))
            .collect()
    }

    /// Pick the next guess, or `None` if no candidate remains
    pub fn next_guess<R: Rng + ?Sized>(
        &self,
        history: &[(Guess, RowFeedback)],
        rng: &mut R,
    ) -> Option<Guess> {
        let candidates = self.filter_candidates(history);
        let choice = candidates.choose(rng)?;
        Guess::new(choice.book.clone(), choice.digits()).ok()
    }

    /// Play a full round against `target` through the turn engine
    pub fn play<R: Rng + ?Sized>(
        &self,
        target: &Passage,
        attempts_max: usize,
        rng: &mut R,
    ) -> PlayRecord {
        let mut session = GameSession::new(target.clone(), attempts_max, RevealMode::default());
        let mut history: Vec<(Guess, RowFeedback)> = Vec::new();

        while !session.is_over() {
            let Some(guess) = self.next_guess(&history, rng) else {
                break;
            };
            match session.submit(&guess) {
                Ok(result) => history.push((guess, result.feedback)),
                Err(_) => break,
            }
        }

        PlayRecord {
            target: target.locator(),
            guesses: history.into_iter().map(|(guess, _)| guess).collect(),
            won: session.did_win(),
        }
    }
}
