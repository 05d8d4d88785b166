//! Error types for corpus loading and game play

use crate::core::GuessError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised while loading a corpus file.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// No candidate location held a readable corpus file.
    #[error("no corpus file found (looked for {0})")]
    NotFound(String),

    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a JSON array of passage records.
    #[error("malformed corpus data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors a caller can get back from the game engine.
///
/// None of these corrupt session state; they are refusals the caller is
/// expected to prevent with `is_playable`, `is_complete` and `is_game_over`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The corpus holds no passages, so no game can be played.
    #[error("no passage data is loaded")]
    DataUnavailable,

    /// No session has been started yet.
    #[error("no game in progress")]
    NoSession,

    /// The session already ended; start a new game.
    #[error("the game is already over")]
    GameOver,

    /// The game has not ended yet.
    #[error("the game is still in progress")]
    GameInProgress,

    /// The submitted row is missing fields or malformed.
    #[error(transparent)]
    InvalidGuess(#[from] GuessError),
}
