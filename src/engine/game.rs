//! Game facade used by the presentation layer
//!
//! Owns the corpus, the random source and the current session. Starting a new
//! game discards the previous session and draws a fresh target.

use super::reveal::RevealMode;
use super::session::{DEFAULT_ATTEMPTS, GameSession, SessionView, TurnResult};
use crate::core::{Guess, GuessDraft};
use crate::corpus::Corpus;
use crate::error::{GameError, GameResult};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Message shown in place of a clue when no passages are loaded
pub const NO_DATA_MESSAGE: &str =
    "Failed to load data. Please ensure bible_sections.json is in the directory.";

/// Game rules and randomness settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Rows per game, also the number of reveal stages
    pub attempts_max: usize,
    pub reveal_mode: RevealMode,
    /// Fixed seed for target selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            attempts_max: DEFAULT_ATTEMPTS,
            reveal_mode: RevealMode::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// The game engine as seen by a driving shell
pub struct Game {
    corpus: Corpus,
    config: GameConfig,
    rng: StdRng,
    session: Option<GameSession>,
}

impl Game {
    #[must_use]
    pub fn new(corpus: Corpus, config: GameConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            corpus,
            config,
            rng,
            session: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// False when no passages are loaded; all play actions are then refused
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.corpus.is_empty()
    }

    /// Book names for the picker, sorted
    #[must_use]
    pub fn book_names(&self) -> Vec<&str> {
        self.corpus.sorted_book_names()
    }

    /// Draw a new target and open row 0
    ///
    /// # Errors
    ///
    /// Returns `GameError::DataUnavailable` if the corpus is empty.
    ///
    /// # Examples
    /// ```
    /// use bibirble::core::{Guess, Passage};
    /// use bibirble::corpus::Corpus;
    /// use bibirble::engine::{Game, GameConfig, SessionState};
    ///
    /// let corpus = Corpus::new(vec![Passage::new("John", 11, 35, "Jesus wept.")]);
    /// let mut game = Game::new(corpus, GameConfig::default().with_seed(1));
    ///
    /// let view = game.start_new_game().unwrap();
    /// assert_eq!(view.clue_text, "Jesus ...");
    ///
    /// let result = game.submit_guess(&Guess::new("John", [1, 1, 3, 5]).unwrap()).unwrap();
    /// assert_eq!(result.state, SessionState::GameOver { won: true });
    /// assert!(game.did_win());
    /// ```
    pub fn start_new_game(&mut self) -> GameResult<SessionView> {
        let target = self
            .corpus
            .random_passage(&mut self.rng)
            .cloned()
            .ok_or(GameError::DataUnavailable)?;
        let locator = target.locator();
        tracing::debug!("Target: {locator}");

        let session = GameSession::new(target, self.config.attempts_max, self.config.reveal_mode);
        let view = session.view();
        self.session = Some(session);
        Ok(view)
    }

    /// Clue text for the current session
    ///
    /// Without data this is [`NO_DATA_MESSAGE`]; before the first game it is empty.
    #[must_use]
    pub fn current_clue_text(&self) -> String {
        if !self.is_playable() {
            return NO_DATA_MESSAGE.to_string();
        }
        self.session
            .as_ref()
            .map(GameSession::clue_text)
            .unwrap_or_default()
    }

    /// Score a complete guess for the open row
    ///
    /// # Errors
    ///
    /// Returns `DataUnavailable` without data, `NoSession` before the first
    /// game, and `GameOver` once the round ended.
    pub fn submit_guess(&mut self, guess: &Guess) -> GameResult<TurnResult> {
        self.active_session_mut()?.submit(guess)
    }

    /// Score an input row, refusing it if any field is empty
    ///
    /// # Errors
    ///
    /// As [`Game::submit_guess`], plus `InvalidGuess` for an incomplete row.
    pub fn submit_draft(&mut self, draft: &GuessDraft) -> GameResult<TurnResult> {
        let session = self.active_session_mut()?;
        let guess = Guess::try_from(draft)?;
        session.submit(&guess)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session.as_ref().is_some_and(GameSession::is_over)
    }

    /// True only once the round is over and was won
    #[must_use]
    pub fn did_win(&self) -> bool {
        self.session.as_ref().is_some_and(GameSession::did_win)
    }

    /// Shareable result text once the round is over
    ///
    /// # Errors
    ///
    /// Returns `NoSession` before the first game and `GameInProgress` while playing.
    pub fn share_summary(&self) -> GameResult<String> {
        self.session
            .as_ref()
            .ok_or(GameError::NoSession)?
            .share_summary()
    }

    fn active_session_mut(&mut self) -> GameResult<&mut GameSession> {
        if !self.is_playable() {
            return Err(GameError::DataUnavailable);
        }
        let session = self.session.as_mut().ok_or(GameError::NoSession)?;
        if session.is_over() {
            return Err(GameError::GameOver);
        }
        Ok(session)
    }
}
