//! Game outcomes and the trait both engines implement.

use serde::{Deserialize, Serialize};

use crate::core::{EngineResult, RandomSource};

/// Status of a marking game after a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line yet and at least one empty cell.
    InProgress,
    /// The player completed a line.
    PlayerWins,
    /// The opponent completed a line.
    OpponentWins,
    /// Board full with no line.
    Draw,
}

impl Outcome {
    /// Terminal outcomes are absorbing: no further placement is accepted.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::PlayerWins => write!(f, "player wins"),
            Outcome::OpponentWins => write!(f, "opponent wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Status of a merge game.
///
/// There is no win state: the milestone tile is cosmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MergeStatus {
    InProgress,
    Over,
}

impl MergeStatus {
    #[must_use]
    pub fn from_terminal(terminal: bool) -> Self {
        if terminal {
            MergeStatus::Over
        } else {
            MergeStatus::InProgress
        }
    }
}

/// A turn-based game driven by one player action at a time.
///
/// ## Implementation Notes
///
/// - `apply` must leave the game untouched when it returns `Err`
/// - all randomness comes from the `rng` argument
/// - `is_terminal` states are absorbing
pub trait Game {
    /// What the player sends in.
    type Action;

    /// What the engine reports back after an accepted action.
    type Report;

    /// Apply one player action.
    fn apply<R: RandomSource + ?Sized>(
        &mut self,
        action: Self::Action,
        rng: &mut R,
    ) -> EngineResult<Self::Report>;

    /// Check whether the game can still change.
    fn is_terminal(&self) -> bool;
}
