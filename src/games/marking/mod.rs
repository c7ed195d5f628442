//! 3x3 marking game ("tic-tac-toe") against a random opponent.
//!
//! The player always moves first. After each accepted placement the
//! opponent marks a uniformly random empty cell, unless the player's mark
//! already decided the game.

mod board;

pub use board::{Mark, MarkingBoard, TurnReport};
