//! Sliding-tile merge game ("2048").
//!
//! - 4x4 board, tiles are powers of two, `0` is empty
//! - a move slides every tile toward one edge, merging equal neighbours once
//! - a move that changes the board spawns a 2 (90%) or 4 (10%)
//! - the game ends when the board is full and no neighbours are equal
//!
//! Right, up and down are the left slide composed with row reversal and
//! transposition, so all four directions share one merge routine.

mod board;
mod game;

pub use board::{slide_row_left, Direction, MergeBoard, MoveResult, Row, MAX_TILE};
pub use game::MergeGame;
