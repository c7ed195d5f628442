//! Square-grid primitives shared by both boards.
//!
//! Boards are plain `[[T; N]; N]` arrays in row-major order. The merge
//! engine derives every direction from `transpose`, `reverse_rows` and a
//! single left slide, so these helpers must be exact inverses of themselves.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Cell list sized for the largest board without spilling to the heap.
pub type CellList = SmallVec<[Cell; 16]>;

/// Row/column coordinate on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build a coordinate only if it lies on a board of the given side.
    #[must_use]
    pub const fn checked(row: usize, col: usize, side: usize) -> Option<Self> {
        if row < side && col < side {
            Some(Self { row, col })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Mirror the grid across its main diagonal in place.
pub fn transpose<T, const N: usize>(cells: &mut [[T; N]; N]) {
    for row in 0..N {
        for col in (row + 1)..N {
            let (upper, lower) = cells.split_at_mut(col);
            std::mem::swap(&mut upper[row][col], &mut lower[0][row]);
        }
    }
}

/// Reverse the order of cells within every row.
pub fn reverse_rows<T, const N: usize>(cells: &mut [[T; N]; N]) {
    for row in cells.iter_mut() {
        row.reverse();
    }
}

/// Collect every cell whose value satisfies `pred`, row-major.
pub fn cells_where<T, const N: usize>(cells: &[[T; N]; N], pred: impl Fn(&T) -> bool) -> CellList {
    let mut out = CellList::new();
    for (row, values) in cells.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            if pred(value) {
                out.push(Cell::new(row, col));
            }
        }
    }
    out
}
