//! Engine error types.
//!
//! Every variant is a rejected caller input. None of them are fatal and
//! none leave a board partially mutated.

use thiserror::Error;

/// Which of the two games an error or session slot refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameKind {
    Merge,
    Marking,
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameKind::Merge => write!(f, "merge"),
            GameKind::Marking => write!(f, "marking"),
        }
    }
}

/// Rejected engine action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Coordinates fall outside the board.
    #[error("cell ({row}, {col}) is outside a {side}x{side} board")]
    OutOfBounds { row: usize, col: usize, side: usize },

    /// The chosen cell already holds a mark.
    #[error("cell ({row}, {col}) is already taken")]
    CellOccupied { row: usize, col: usize },

    /// The game already reached a win or draw.
    #[error("game is already finished")]
    GameFinished,

    /// A merge tile that is not a power of two of at least 2.
    #[error("tile value {value} is not a power of two >= 2")]
    InvalidTile { value: u32 },

    /// Mark counts no sequence of turns could produce.
    #[error("{player} player marks against {opponent} opponent marks")]
    InvalidMarks { player: usize, opponent: usize },

    /// The session has no game of this kind in progress.
    #[error("no {0} game in progress")]
    NoActiveGame(GameKind),

    /// A callback token that maps to no action.
    #[error("unknown action {0:?}")]
    UnknownAction(String),
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
