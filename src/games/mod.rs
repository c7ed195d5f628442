//! Game implementations.
//!
//! - `merge`: 4x4 sliding-tile merge game
//! - `marking`: 3x3 marking game against a random opponent

pub mod marking;
pub mod merge;

pub use marking::{Mark, MarkingBoard, TurnReport};
pub use merge::{Direction, MergeBoard, MergeGame, MoveResult};
