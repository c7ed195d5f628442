//! The 3x3 marking board and its random opponent.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::grid::{self, Cell, CellList};
use crate::core::{EngineError, EngineResult, RandomSource, MARKING_SIDE};
use crate::rules::{Game, Outcome};

/// State of one marking cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    Player,
    Opponent,
}

/// Result of an accepted player turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Where the player marked.
    pub player_cell: Cell,
    /// Where the opponent answered, if it got to move.
    pub opponent_cell: Option<Cell>,
    /// Outcome after both placements.
    pub outcome: Outcome,
}

type Cells = [[Mark; MARKING_SIDE]; MARKING_SIDE];

/// 3x3 grid of marks.
///
/// Serialized as bare rows. Deserializing checks mark counts through
/// `try_from_rows`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Cells", into = "Cells")]
pub struct MarkingBoard {
    cells: Cells,
}

impl TryFrom<Cells> for MarkingBoard {
    type Error = EngineError;

    fn try_from(rows: Cells) -> EngineResult<Self> {
        Self::try_from_rows(rows)
    }
}

impl From<MarkingBoard> for Cells {
    fn from(board: MarkingBoard) -> Self {
        board.cells
    }
}

impl MarkingBoard {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit rows. Mark counts are not checked.
    #[must_use]
    pub fn from_rows(rows: [[Mark; MARKING_SIDE]; MARKING_SIDE]) -> Self {
        Self { cells: rows }
    }

    /// Build a board from rows a real game could reach: the player has
    /// as many marks as the opponent, or one more.
    pub fn try_from_rows(rows: [[Mark; MARKING_SIDE]; MARKING_SIDE]) -> EngineResult<Self> {
        let board = Self::from_rows(rows);
        let player = board.count(Mark::Player);
        let opponent = board.count(Mark::Opponent);
        if player != opponent && player != opponent + 1 {
            return Err(EngineError::InvalidMarks { player, opponent });
        }
        Ok(board)
    }

    #[must_use]
    pub fn rows(&self) -> &[[Mark; MARKING_SIDE]; MARKING_SIDE] {
        &self.cells
    }

    /// Mark at a cell, `None` if the cell is off the board.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.cells.get(cell.row)?.get(cell.col).copied()
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> CellList {
        grid::cells_where(&self.cells, |&m| m == Mark::Empty)
    }

    /// How many cells hold `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|&&m| m == mark).count()
    }

    /// Whether `mark` fills a row, a column or either diagonal.
    ///
    /// Checked in that order.
    #[must_use]
    pub fn has_line(&self, mark: Mark) -> bool {
        let n = MARKING_SIDE;
        let c = &self.cells;

        c.iter().any(|row| row.iter().all(|&m| m == mark))
            || (0..n).any(|col| (0..n).all(|row| c[row][col] == mark))
            || (0..n).all(|i| c[i][i] == mark)
            || (0..n).all(|i| c[i][n - 1 - i] == mark)
    }

    /// Current outcome. The player's lines are checked before the
    /// opponent's, and both before declaring a draw.
    #[must_use]
    pub fn winner(&self) -> Outcome {
        if self.has_line(Mark::Player) {
            Outcome::PlayerWins
        } else if self.has_line(Mark::Opponent) {
            Outcome::OpponentWins
        } else if self.count(Mark::Empty) == 0 {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Validate a placement target without touching the board.
    fn open_cell(&self, row: usize, col: usize) -> EngineResult<Cell> {
        if self.winner().is_terminal() {
            return Err(EngineError::GameFinished);
        }
        let cell = Cell::checked(row, col, MARKING_SIDE).ok_or(EngineError::OutOfBounds {
            row,
            col,
            side: MARKING_SIDE,
        })?;
        if self.cells[row][col] != Mark::Empty {
            return Err(EngineError::CellOccupied { row, col });
        }
        Ok(cell)
    }

    /// Mark a uniformly random empty cell for the opponent.
    ///
    /// Returns `None` when the board is full.
    pub fn opponent_move<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Cell> {
        let empty = self.empty_cells();
        let cell = empty.get(rng.pick_index(empty.len())?).copied()?;
        self.cells[cell.row][cell.col] = Mark::Opponent;
        trace!(%cell, "opponent marked");
        Some(cell)
    }

    /// Place the player's mark, then let the opponent answer.
    ///
    /// Rejected placements (off the board, occupied cell, finished game)
    /// leave the board untouched. The opponent does not move if the
    /// player's mark already decided the game.
    pub fn apply_player_move<R: RandomSource + ?Sized>(
        &mut self,
        row: usize,
        col: usize,
        rng: &mut R,
    ) -> EngineResult<TurnReport> {
        let player_cell = self.open_cell(row, col)?;
        self.cells[row][col] = Mark::Player;

        let opponent_cell = if self.winner().is_terminal() {
            None
        } else {
            self.opponent_move(rng)
        };

        let outcome = self.winner();
        debug!(%player_cell, ?opponent_cell, %outcome, "marking turn");

        Ok(TurnReport {
            player_cell,
            opponent_cell,
            outcome,
        })
    }
}

impl Game for MarkingBoard {
    type Action = Cell;
    type Report = TurnReport;

    fn apply<R: RandomSource + ?Sized>(&mut self, action: Cell, rng: &mut R) -> EngineResult<TurnReport> {
        self.apply_player_move(action.row, action.col, rng)
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::Player;
    const O: Mark = Mark::Opponent;

    #[test]
    fn test_new_board_in_progress() {
        let board = MarkingBoard::new();
        assert_eq!(board.winner(), Outcome::InProgress);
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_lines() {
        let row = MarkingBoard::from_rows([[E, E, E], [X, X, X], [O, O, E]]);
        assert_eq!(row.winner(), Outcome::PlayerWins);

        let col = MarkingBoard::from_rows([[O, X, E], [O, X, E], [O, E, X]]);
        assert_eq!(col.winner(), Outcome::OpponentWins);

        let diag = MarkingBoard::from_rows([[X, O, E], [O, X, E], [E, E, X]]);
        assert_eq!(diag.winner(), Outcome::PlayerWins);

        let anti = MarkingBoard::from_rows([[X, X, O], [E, O, E], [O, X, E]]);
        assert_eq!(anti.winner(), Outcome::OpponentWins);
    }

    #[test]
    fn test_draw() {
        let board = MarkingBoard::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(board.winner(), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board = MarkingBoard::from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert_eq!(board.winner(), Outcome::PlayerWins);
    }

    #[test]
    fn test_player_checked_before_opponent() {
        let board = MarkingBoard::from_rows([[X, X, X], [O, O, O], [E, E, E]]);
        assert_eq!(board.winner(), Outcome::PlayerWins);
    }

    #[test]
    fn test_opponent_answers() {
        let mut board = MarkingBoard::new();
        let mut rng = ScriptedRng::new([0], []);

        let report = board.apply_player_move(1, 1, &mut rng).unwrap();

        assert_eq!(report.player_cell, Cell::new(1, 1));
        assert_eq!(report.opponent_cell, Some(Cell::new(0, 0)));
        assert_eq!(report.outcome, Outcome::InProgress);
        assert_eq!(board.count(Mark::Player), 1);
        assert_eq!(board.count(Mark::Opponent), 1);
    }

    #[test]
    fn test_winning_move_skips_opponent() {
        let mut board = MarkingBoard::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        let mut rng = ScriptedRng::new([0], []);

        let report = board.apply_player_move(0, 2, &mut rng).unwrap();

        assert_eq!(report.outcome, Outcome::PlayerWins);
        assert_eq!(report.opponent_cell, None);
        assert_eq!(board.count(Mark::Opponent), 2);
        assert_eq!(rng.remaining_indices(), 1);
    }

    #[test]
    fn test_opponent_can_win() {
        let mut board = MarkingBoard::from_rows([[X, X, O], [E, O, E], [E, E, X]]);
        // Empty after the player takes (1,0): (1,2), (2,0), (2,1). Pick (2,0).
        let mut rng = ScriptedRng::new([1], []);

        let report = board.apply_player_move(1, 0, &mut rng).unwrap();

        assert_eq!(report.opponent_cell, Some(Cell::new(2, 0)));
        assert_eq!(report.outcome, Outcome::OpponentWins);
    }

    #[test]
    fn test_last_cell_draw_without_opponent() {
        let mut board = MarkingBoard::from_rows([[X, O, X], [X, O, O], [O, X, E]]);
        let mut rng = ScriptedRng::first();

        let report = board.apply_player_move(2, 2, &mut rng).unwrap();

        assert_eq!(report.outcome, Outcome::Draw);
        assert_eq!(report.opponent_cell, None);
    }

    #[test]
    fn test_rejections_leave_board_unchanged() {
        let mut board = MarkingBoard::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        let before = board;
        let mut rng = ScriptedRng::first();

        assert_eq!(
            board.apply_player_move(0, 0, &mut rng),
            Err(EngineError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(
            board.apply_player_move(3, 1, &mut rng),
            Err(EngineError::OutOfBounds { row: 3, col: 1, side: 3 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        let mut board = MarkingBoard::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        let before = board;
        let mut rng = ScriptedRng::first();

        assert_eq!(
            board.apply_player_move(1, 2, &mut rng),
            Err(EngineError::GameFinished)
        );
        assert_eq!(board, before);
        assert!(Game::is_terminal(&board));
    }

    #[test]
    fn test_try_from_rows_checks_counts() {
        assert!(MarkingBoard::try_from_rows([[X, O, E], [X, E, E], [E, E, E]]).is_ok());
        assert!(MarkingBoard::try_from_rows([[X, O, E], [E, E, E], [E, E, E]]).is_ok());
        assert_eq!(
            MarkingBoard::try_from_rows([[X, X, E], [X, O, E], [E, E, E]]),
            Err(EngineError::InvalidMarks { player: 3, opponent: 1 })
        );
        assert_eq!(
            MarkingBoard::try_from_rows([[O, E, E], [E, E, E], [E, E, E]]),
            Err(EngineError::InvalidMarks { player: 0, opponent: 1 })
        );
    }

    #[test]
    fn test_deserialize_checks_counts() {
        let board = MarkingBoard::from_rows([[X, O, E], [E, X, E], [E, E, E]]);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<MarkingBoard>(&json).unwrap(), board);

        let lopsided = r#"[["Player","Player","Player"],["Empty","Empty","Empty"],["Empty","Empty","Empty"]]"#;
        let err = serde_json::from_str::<MarkingBoard>(lopsided).unwrap_err();
        assert!(err.to_string().contains("3 player marks"), "{err}");
    }

    /// Breaks the `pick_index` contract by answering one past the end.
    struct PastTheEnd;

    impl RandomSource for PastTheEnd {
        fn pick_index(&mut self, len: usize) -> Option<usize> {
            Some(len)
        }

        fn chance(&mut self, _probability: f64) -> bool {
            false
        }
    }

    #[test]
    fn test_bad_index_leaves_opponent_idle() {
        let mut board = MarkingBoard::new();

        let report = board.apply_player_move(0, 0, &mut PastTheEnd).unwrap();

        assert_eq!(report.opponent_cell, None);
        assert_eq!(board.count(Mark::Player), 1);
        assert_eq!(board.count(Mark::Opponent), 0);
    }

    #[test]
    fn test_opponent_move_full_board() {
        let mut board = MarkingBoard::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        let mut rng = ScriptedRng::first();
        assert_eq!(board.opponent_move(&mut rng), None);
    }
}
