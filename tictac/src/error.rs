//! Errors returned by the game engine.
//!
//! Every error is a rejected request: the engine state is left exactly as it
//! was before the call.

use thiserror::Error;

/// Why a cell selection was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("index is outside the board (must be 0-8)")]
    OutOfBounds,

    #[error("cell is already occupied")]
    Occupied,

    #[error("game already has a winner")]
    GameOver,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid cell selection {index}: {reason}")]
    InvalidCellSelection { index: usize, reason: Rejection },

    #[error("history position {position} is out of range (history has {len} snapshots)")]
    InvalidHistoryPosition { position: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
