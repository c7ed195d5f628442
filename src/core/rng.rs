//! Injectable randomness for tile spawns and opponent picks.
//!
//! ## Key Features
//!
//! - **Injectable**: engine code only sees the `RandomSource` trait
//! - **Deterministic**: `GameRng` with the same seed produces identical games
//! - **Forkable**: each session gets its own independent stream
//! - **Scriptable**: `ScriptedRng` replays fixed choices for tests
//!
//! ## Usage
//!
//! ```
//! use rust_minigames::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for a new session
//! let mut session_rng = rng.fork();
//!
//! // Picking from nothing is a no-op, never an error
//! assert_eq!(session_rng.pick_index(0), None);
//! assert!(session_rng.pick_index(16).unwrap() < 16);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of every random decision the engines make.
///
/// Engines never touch ambient random state; callers pass a source in.
pub trait RandomSource {
    /// Pick an index uniformly from `0..len`.
    ///
    /// Returns `None` when `len == 0`.
    fn pick_index(&mut self, len: usize) -> Option<usize>;

    /// Return `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

/// Deterministic RNG with forking for per-session streams.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Replays a fixed script of choices.
///
/// Indices are reduced modulo the requested length. Once a queue runs dry
/// the source answers `0` and `false`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    indices: VecDeque<usize>,
    chances: VecDeque<bool>,
}

impl ScriptedRng {
    /// Create a script from index picks and coin flips.
    pub fn new(
        indices: impl IntoIterator<Item = usize>,
        chances: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            chances: chances.into_iter().collect(),
        }
    }

    /// A script that always picks the first candidate and never rolls a 4.
    #[must_use]
    pub fn first() -> Self {
        Self::default()
    }

    /// Number of index picks not yet consumed.
    #[must_use]
    pub fn remaining_indices(&self) -> usize {
        self.indices.len()
    }
}

impl RandomSource for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.indices.pop_front().unwrap_or(0) % len)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}
