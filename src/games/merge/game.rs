//! A merge board together with its configuration and running score.

use serde::{Deserialize, Serialize};

use super::board::{Direction, MergeBoard, MoveResult};
use crate::core::{EngineResult, MergeConfig, RandomSource};
use crate::rules::{Game, MergeStatus};

/// One player's merge game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergeGame {
    board: MergeBoard,
    config: MergeConfig,
    score: u64,
    moves: u32,
}

impl MergeGame {
    /// Start a new game with seed tiles drawn from `rng`.
    pub fn new<R: RandomSource + ?Sized>(config: MergeConfig, rng: &mut R) -> Self {
        let board = MergeBoard::new_game(&config, rng);
        Self::from_board(board, config)
    }

    /// Resume from an existing board with a zero score.
    #[must_use]
    pub fn from_board(board: MergeBoard, config: MergeConfig) -> Self {
        Self {
            board,
            config,
            score: 0,
            moves: 0,
        }
    }

    /// Apply a move. Only moves that change the board are counted.
    pub fn apply_move<R: RandomSource + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> MoveResult {
        let result = self.board.apply_move(direction, &self.config, rng);
        if result.changed {
            self.score += u64::from(result.score_gained);
            self.moves += 1;
        }
        result
    }

    pub fn board(&self) -> &MergeBoard {
        &self.board
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Sum of every merged tile so far.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of moves that changed the board.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }

    pub fn status(&self) -> MergeStatus {
        MergeStatus::from_terminal(self.is_over())
    }

    /// Whether the configured milestone tile is on the board.
    pub fn reached_milestone(&self) -> bool {
        self.board.reached_milestone(self.config.milestone)
    }
}

impl Game for MergeGame {
    type Action = Direction;
    type Report = MoveResult;

    fn apply<R: RandomSource + ?Sized>(&mut self, action: Direction, rng: &mut R) -> EngineResult<MoveResult> {
        Ok(self.apply_move(action, rng))
    }

    fn is_terminal(&self) -> bool {
        self.is_over()
    }
}
