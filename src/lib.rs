//! # rust-minigames
//!
//! Game-state engines for two small turn-based games played over chat:
//! a 4x4 sliding-tile merge puzzle and a 3x3 marking game against a
//! random opponent.
//!
//! ## Design Principles
//!
//! 1. **Transport-Agnostic**: the engines take an action and return a new
//!    state plus a status. Message delivery lives elsewhere.
//!
//! 2. **Injected Randomness**: every random choice goes through a
//!    `RandomSource` the caller passes in. Same seed, same game.
//!
//! 3. **Explicit Ownership**: sessions own their games through a
//!    `SessionStore`; there is no global state.
//!
//! ## Modules
//!
//! - `core`: Grid primitives, RNG, configuration, errors
//! - `rules`: Outcomes and the `Game` trait
//! - `games`: The merge and marking engines
//! - `session`: Session store and chat action vocabulary
//! - `render`: Board-to-glyph mapping

pub mod core;
pub mod games;
pub mod render;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Cell, EngineError, EngineResult, GameKind,
    GameRng, GameRngState, RandomSource, ScriptedRng,
    MergeConfig, MARKING_SIDE, MERGE_SIDE,
};

pub use crate::rules::{Game, MergeStatus, Outcome};

pub use crate::games::{
    Direction, MergeBoard, MergeGame, MoveResult,
    Mark, MarkingBoard, TurnReport,
};

pub use crate::session::{PlayerAction, Reply, Session, SessionStore};
