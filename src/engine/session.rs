//! Turn engine: one game round as a finite-state machine
//!
//! A session starts in `AwaitingGuess { stage: 0 }`. Each scored row either
//! wins, exhausts the attempts, or unlocks the next stage. Scored rows are
//! kept and never change.

use super::reveal::{RevealMode, Stage, reveal_with};
use super::scoring::score_guess;
use crate::core::{Guess, Passage, RowFeedback};
use crate::error::{GameError, GameResult};

/// Attempts per game in the standard rules
pub const DEFAULT_ATTEMPTS: usize = 7;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Row `stage` is open for input
    AwaitingGuess { stage: usize },
    /// The round ended
    GameOver { won: bool },
}

impl SessionState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::GameOver { .. })
    }

    /// Reveal stage matching this state
    #[must_use]
    pub const fn reveal_stage(self) -> Stage {
        match self {
            Self::AwaitingGuess { stage } => Stage::Attempt(stage),
            Self::GameOver { .. } => Stage::Terminal,
        }
    }
}

/// A submitted and locked row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRow {
    pub guess: Guess,
    pub feedback: RowFeedback,
}

/// What one submission produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    pub feedback: RowFeedback,
    pub state: SessionState,
}

impl TurnResult {
    /// The row the caller should open next, if the game goes on
    #[must_use]
    pub const fn unlocked_row(&self) -> Option<usize> {
        match self.state {
            SessionState::AwaitingGuess { stage } => Some(stage),
            SessionState::GameOver { .. } => None,
        }
    }
}

/// What the presentation layer may see of a session (the target stays hidden)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub state: SessionState,
    pub attempts_max: usize,
    pub clue_text: String,
    pub rows: Vec<ScoredRow>,
}

impl SessionView {
    /// Rows other than the open one are not editable
    #[must_use]
    pub const fn is_row_locked(&self, row: usize) -> bool {
        !matches!(self.state, SessionState::AwaitingGuess { stage } if stage == row)
    }
}

/// One game round against a fixed target passage
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Passage,
    attempts_max: usize,
    reveal_mode: RevealMode,
    state: SessionState,
    rows: Vec<ScoredRow>,
}

impl GameSession {
    /// Start a round; `attempts_max` is raised to at least 1
    #[must_use]
    pub fn new(target: Passage, attempts_max: usize, reveal_mode: RevealMode) -> Self {
        Self {
            target,
            attempts_max: attempts_max.max(1),
            reveal_mode,
            state: SessionState::AwaitingGuess { stage: 0 },
            rows: Vec::with_capacity(attempts_max),
        }
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Passage {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn attempts_max(&self) -> usize {
        self.attempts_max
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[ScoredRow] {
        &self.rows
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub const fn did_win(&self) -> bool {
        matches!(self.state, SessionState::GameOver { won: true })
    }

    /// Index of the row open for input
    #[must_use]
    pub const fn active_row(&self) -> Option<usize> {
        match self.state {
            SessionState::AwaitingGuess { stage } => Some(stage),
            SessionState::GameOver { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_row_locked(&self, row: usize) -> bool {
        !matches!(self.active_row(), Some(open) if open == row)
    }

    /// Score a guess for the open row and advance the state machine
    ///
    /// # Errors
    ///
    /// Returns `GameError::GameOver` if the round already ended; the session
    /// is left untouched.
    pub fn submit(&mut self, guess: &Guess) -> GameResult<TurnResult> {
        let SessionState::AwaitingGuess { stage } = self.state else {
            return Err(GameError::GameOver);
        };

        let feedback = score_guess(guess, &self.target.locator());
        self.rows.push(ScoredRow {
            guess: guess.clone(),
            feedback,
        });

        self.state = if feedback.is_perfect() {
            SessionState::GameOver { won: true }
        } else if stage + 1 >= self.attempts_max {
            SessionState::GameOver { won: false }
        } else {
            SessionState::AwaitingGuess { stage: stage + 1 }
        };

        tracing::debug!(
            "Row {stage} scored {feedback} ({} exact) -> {:?}",
            feedback.correct_count(),
            self.state
        );

        Ok(TurnResult {
            feedback,
            state: self.state,
        })
    }

    /// Clue for the current state: masked text while playing, full text and
    /// locator once the round is over
    #[must_use]
    pub fn clue_text(&self) -> String {
        let revealed = reveal_with(&self.target.text, self.state.reveal_stage(), self.reveal_mode);
        if self.is_over() {
            format!("{revealed}\n\n- {}", self.target.locator())
        } else {
            revealed
        }
    }

    /// Message announcing the result once the round is over
    #[must_use]
    pub fn end_message(&self) -> Option<String> {
        match self.state {
            SessionState::GameOver { won: true } => Some("You got it correct!".to_string()),
            SessionState::GameOver { won: false } => Some(format!(
                "You ran out of guesses. The correct answer was {}. \
                 Maybe you should read your Bible to reflect on what you got wrong!",
                self.target.locator()
            )),
            SessionState::AwaitingGuess { .. } => None,
        }
    }

    /// Human-readable result to share: locator and outcome
    ///
    /// # Errors
    ///
    /// Returns `GameError::GameInProgress` before the round is over.
    pub fn share_summary(&self) -> GameResult<String> {
        let SessionState::GameOver { won } = self.state else {
            return Err(GameError::GameInProgress);
        };
        let result = if won {
            format!("Solved in {}/{}", self.rows.len(), self.attempts_max)
        } else {
            format!("Not solved (X/{})", self.attempts_max)
        };
        Ok(format!(
            "Could you beat this score in Bibirble?\n\n- {}\n\n{result}",
            self.target.locator()
        ))
    }

    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            state: self.state,
            attempts_max: self.attempts_max,
            clue_text: self.clue_text(),
            rows: self.rows.clone(),
        }
    }
}
