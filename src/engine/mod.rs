//! Game engine
//!
//! - [`reveal`]: masks the target passage according to the current stage
//! - [`scoring`]: per-field feedback for a guess row
//! - [`session`]: the turn state machine of one round
//! - [`game`]: the facade a front end drives

pub mod game;
pub mod reveal;
pub mod scoring;
pub mod session;

pub use game::{Game, GameConfig, NO_DATA_MESSAGE};
pub use reveal::{PLACEHOLDER, RevealMode, Stage, reveal, reveal_with};
pub use scoring::{score_book, score_digits, score_guess};
pub use session::{
    DEFAULT_ATTEMPTS, GameSession, ScoredRow, SessionState, SessionView, TurnResult,
};
