//! The 4x4 merge board and its slide/merge algorithm.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::grid::{self, Cell, CellList};
use crate::core::{EngineError, EngineResult, MergeConfig, RandomSource, MERGE_SIDE};
use crate::rules::MergeStatus;

/// Largest tile reachable on a 4x4 board. `from_rows` rejects anything above.
pub const MAX_TILE: u32 = 1 << 17;

/// One row (or column, after a transpose) of the board.
pub type Row = [u32; MERGE_SIDE];

/// Direction of a merge move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// How this direction maps onto the left slide: `(reverse, transpose)`.
    const fn transform(self) -> (bool, bool) {
        match self {
            Direction::Left => (false, false),
            Direction::Right => (true, false),
            Direction::Up => (false, true),
            Direction::Down => (true, true),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(EngineError::UnknownAction(other.to_string())),
        }
    }
}

/// What a single move did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Whether any tile slid or merged.
    pub changed: bool,
    /// Where the follow-up tile landed, if one was spawned.
    pub spawned: Option<Cell>,
    /// Sum of the tiles produced by merges.
    pub score_gained: u32,
    /// Status after the spawn.
    pub status: MergeStatus,
}

/// Slide one row to the left, merging equal neighbours once.
///
/// Returns the sum of the merged tiles. A tile produced by a merge never
/// merges again in the same pass.
///
/// ```
/// use rust_minigames::games::merge::slide_row_left;
///
/// let mut row = [2, 2, 2, 2];
/// assert_eq!(slide_row_left(&mut row), 8);
/// assert_eq!(row, [4, 4, 0, 0]);
/// ```
pub fn slide_row_left(row: &mut Row) -> u32 {
    let mut packed = [0u32; MERGE_SIDE];
    let mut len = 0;
    for &value in row.iter().filter(|&&v| v != 0) {
        packed[len] = value;
        len += 1;
    }

    let mut out = [0u32; MERGE_SIDE];
    let mut out_len = 0;
    let mut gained = 0;
    let mut i = 0;
    while i < len {
        if i + 1 < len && packed[i] == packed[i + 1] {
            out[out_len] = packed[i] * 2;
            gained += out[out_len];
            i += 2;
        } else {
            out[out_len] = packed[i];
            i += 1;
        }
        out_len += 1;
    }

    *row = out;
    gained
}

type Cells = [Row; MERGE_SIDE];

/// 4x4 grid of tiles; `0` is an empty cell.
///
/// Serialized as bare rows. Deserializing validates through `from_rows`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Cells", into = "Cells")]
pub struct MergeBoard {
    cells: Cells,
}

impl TryFrom<Cells> for MergeBoard {
    type Error = EngineError;

    fn try_from(rows: Cells) -> EngineResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<MergeBoard> for Cells {
    fn from(board: MergeBoard) -> Self {
        board.cells
    }
}

impl MergeBoard {
    /// A board with no tiles.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A fresh board with the configured number of seed tiles.
    pub fn new_game<R: RandomSource + ?Sized>(config: &MergeConfig, rng: &mut R) -> Self {
        let mut board = Self::empty();
        for _ in 0..config.seed_tiles {
            board.insert_random_tile(config, rng);
        }
        board
    }

    /// Build a board from explicit rows.
    ///
    /// Every non-zero tile must be a power of two between 2 and `MAX_TILE`.
    pub fn from_rows(rows: [Row; MERGE_SIDE]) -> EngineResult<Self> {
        if let Some(&value) = rows
            .iter()
            .flatten()
            .find(|&&v| v != 0 && (v < 2 || v > MAX_TILE || !v.is_power_of_two()))
        {
            return Err(EngineError::InvalidTile { value });
        }
        Ok(Self { cells: rows })
    }

    /// Rows in top-to-bottom order.
    #[must_use]
    pub fn rows(&self) -> &[Row; MERGE_SIDE] {
        &self.cells
    }

    /// Tile at a cell, `None` if the cell is off the board.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<u32> {
        self.cells.get(cell.row)?.get(cell.col).copied()
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> CellList {
        grid::cells_where(&self.cells, |&v| v == 0)
    }

    /// Largest tile on the board, `0` for an empty board.
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Whether some tile has reached the milestone value.
    #[must_use]
    pub fn reached_milestone(&self, milestone: u32) -> bool {
        self.max_tile() >= milestone
    }

    /// Place a 2 or 4 on a random empty cell.
    ///
    /// The cell is picked first, then the value. Returns the cell written,
    /// or `None` when the board is full.
    pub fn insert_random_tile<R: RandomSource + ?Sized>(
        &mut self,
        config: &MergeConfig,
        rng: &mut R,
    ) -> Option<Cell> {
        let empty = self.empty_cells();
        let cell = empty.get(rng.pick_index(empty.len())?).copied()?;
        let value = if rng.chance(config.four_probability) { 4 } else { 2 };
        self.cells[cell.row][cell.col] = value;
        trace!(%cell, value, "spawned tile");
        Some(cell)
    }

    /// Slide and merge without spawning. Returns the new board and the
    /// merged score.
    #[must_use]
    pub fn shift(&self, direction: Direction) -> (Self, u32) {
        let (reverse, turn) = direction.transform();
        let mut cells = self.cells;

        if turn {
            grid::transpose(&mut cells);
        }
        if reverse {
            grid::reverse_rows(&mut cells);
        }

        let gained = cells.iter_mut().map(slide_row_left).sum();

        if reverse {
            grid::reverse_rows(&mut cells);
        }
        if turn {
            grid::transpose(&mut cells);
        }

        (Self { cells }, gained)
    }

    /// Apply a move in place and spawn a tile if anything moved.
    ///
    /// A move that changes nothing is a valid null transition: the board
    /// stays as it was and no tile appears.
    pub fn apply_move<R: RandomSource + ?Sized>(
        &mut self,
        direction: Direction,
        config: &MergeConfig,
        rng: &mut R,
    ) -> MoveResult {
        let (shifted, score_gained) = self.shift(direction);
        let changed = shifted != *self;

        let spawned = if changed {
            *self = shifted;
            self.insert_random_tile(config, rng)
        } else {
            None
        };

        let status = MergeStatus::from_terminal(self.is_terminal());
        debug!(%direction, changed, score_gained, ?status, "merge move");

        MoveResult {
            changed,
            spawned,
            score_gained,
            status,
        }
    }

    /// No empty cell and no equal horizontal or vertical neighbours.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        if self.cells.iter().flatten().any(|&v| v == 0) {
            return false;
        }

        for row in &self.cells {
            if row.windows(2).any(|pair| pair[0] == pair[1]) {
                return false;
            }
        }

        for col in 0..MERGE_SIDE {
            for row in 0..MERGE_SIDE - 1 {
                if self.cells[row][col] == self.cells[row + 1][col] {
                    return false;
                }
            }
        }

        true
    }
}
