//! Engine configuration.
//!
//! Board sides are fixed by the games themselves. What callers can tune is
//! how the merge board spawns tiles and which tile counts as the milestone.

use serde::{Deserialize, Serialize};

/// Side length of the merge board.
pub const MERGE_SIDE: usize = 4;

/// Side length of the marking board.
pub const MARKING_SIDE: usize = 3;

/// Configuration for the merge game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Tiles placed on a fresh board.
    pub seed_tiles: usize,

    /// Probability that a spawned tile is a 4 rather than a 2.
    pub four_probability: f64,

    /// Tile value shown as the milestone glyph. Play continues past it.
    pub milestone: u32,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            seed_tiles: 2,
            four_probability: 0.1,
            milestone: 2048,
        }
    }
}

impl MergeConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many tiles a fresh board starts with.
    #[must_use]
    pub fn with_seed_tiles(mut self, count: usize) -> Self {
        assert!(count <= MERGE_SIDE * MERGE_SIDE, "Seed tiles must fit on the board");
        self.seed_tiles = count;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        assert!((0.0..=1.0).contains(&probability), "Probability must be within 0..=1");
        self.four_probability = probability;
        self
    }

    /// Set the milestone tile.
    #[must_use]
    pub fn with_milestone(mut self, milestone: u32) -> Self {
        assert!(
            milestone >= 2 && milestone.is_power_of_two(),
            "Milestone must be a power of two"
        );
        self.milestone = milestone;
        self
    }
}
