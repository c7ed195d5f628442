//! Player actions as they arrive from a chat front-end.
//!
//! Buttons carry short callback tokens. `PlayerAction` parses them and
//! formats them back, so a front-end can build its buttons from the same
//! vocabulary it later receives.

use crate::core::{Cell, EngineError};
use crate::games::Direction;

const START_MERGE: &str = "start_2048";
const START_MARKING: &str = "start_xo";
const PLACE_PREFIX: &str = "move_";

/// One thing a player can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Start (or restart) the merge game.
    StartMerge,
    /// Start (or restart) the marking game.
    StartMarking,
    /// Slide the merge board.
    Move(Direction),
    /// Mark a cell on the marking board. Coordinates are checked later.
    Place(Cell),
}

impl std::fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerAction::StartMerge => f.write_str(START_MERGE),
            PlayerAction::StartMarking => f.write_str(START_MARKING),
            PlayerAction::Move(direction) => write!(f, "{direction}"),
            PlayerAction::Place(cell) => write!(f, "{PLACE_PREFIX}{}_{}", cell.row, cell.col),
        }
    }
}

impl std::str::FromStr for PlayerAction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || EngineError::UnknownAction(s.to_string());

        match s {
            START_MERGE => return Ok(PlayerAction::StartMerge),
            START_MARKING => return Ok(PlayerAction::StartMarking),
            _ => {}
        }

        if let Some(coords) = s.strip_prefix(PLACE_PREFIX) {
            let (row, col) = coords.split_once('_').ok_or_else(unknown)?;
            let row = row.parse().map_err(|_| unknown())?;
            let col = col.parse().map_err(|_| unknown())?;
            return Ok(PlayerAction::Place(Cell::new(row, col)));
        }

        s.parse().map(PlayerAction::Move).map_err(|_| unknown())
    }
}
