//! Error types for the deduction engine
//!
//! Data and store errors are fatal to startup (no round is playable);
//! per-guess errors are local and never disturb round state.

use thiserror::Error;

use crate::round::RoundStatus;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Engine error types
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid player data (duplicate name, blank name)
    #[error("invalid player data: {0}")]
    Data(String),

    /// Malformed player data source (missing field, wrong type, bad JSON)
    #[error("malformed player data: {0}")]
    Json(#[from] serde_json::Error),

    /// Unreadable player data source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No players loaded, nothing to pick a secret from
    #[error("player store is empty: no secret can be selected")]
    EmptyStore,

    /// Guess input was empty or whitespace-only (no attempt consumed)
    #[error("empty guess: enter a player name")]
    EmptyInput,

    /// Guessed name matched no loaded player (no attempt consumed)
    #[error("unknown player: {0:?}")]
    UnknownPlayer(String),

    /// Guess submitted after the round already ended
    #[error("round is over ({0:?}): start a new round to keep playing")]
    RoundOver(RoundStatus),
}
