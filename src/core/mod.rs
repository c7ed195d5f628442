//! Core engine types: grid primitives, RNG, configuration, errors.
//!
//! Nothing here knows the rules of either game.

pub mod config;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::{MergeConfig, MARKING_SIDE, MERGE_SIDE};
pub use error::{EngineError, EngineResult, GameKind};
pub use grid::{Cell, CellList};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
