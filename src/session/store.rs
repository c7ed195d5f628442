//! Per-player game ownership.
//!
//! A `SessionStore` maps a session key (chat id, user id, ...) to the games
//! that player owns. Each session draws from its own forked RNG, so one
//! player's moves never shift another player's random stream.
//!
//! ## Example
//!
//! ```
//! use rust_minigames::session::{Reply, SessionStore};
//!
//! let mut store: SessionStore<u64> = SessionStore::new(42);
//! store.dispatch(&7, "start_xo".parse().unwrap()).unwrap();
//!
//! match store.dispatch(&7, "move_1_1".parse().unwrap()).unwrap() {
//!     Reply::Marking { report, .. } => assert!(report.is_some()),
//!     Reply::Merge { .. } => unreachable!(),
//! }
//! ```

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::info;

use super::action::PlayerAction;
use crate::core::{Cell, EngineError, EngineResult, GameKind, GameRng, MergeConfig};
use crate::games::{Direction, MarkingBoard, MergeBoard, MergeGame, MoveResult, TurnReport};
use crate::rules::{Game, MergeStatus, Outcome};

/// Everything one player owns.
#[derive(Clone, Debug)]
pub struct Session {
    merge: Option<MergeGame>,
    marking: Option<MarkingBoard>,
    rng: GameRng,
}

impl Session {
    fn new(rng: GameRng) -> Self {
        Self {
            merge: None,
            marking: None,
            rng,
        }
    }

    pub fn merge(&self) -> Option<&MergeGame> {
        self.merge.as_ref()
    }

    pub fn marking(&self) -> Option<&MarkingBoard> {
        self.marking.as_ref()
    }
}

/// What a front-end needs to redraw after an action.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Merge {
        board: MergeBoard,
        score: u64,
        status: MergeStatus,
        milestone: bool,
        /// `None` right after a (re)start.
        result: Option<MoveResult>,
    },
    Marking {
        board: MarkingBoard,
        outcome: Outcome,
        /// `None` right after a (re)start.
        report: Option<TurnReport>,
    },
}

impl Reply {
    fn merge(game: &MergeGame, result: Option<MoveResult>) -> Self {
        Reply::Merge {
            board: *game.board(),
            score: game.score(),
            status: game.status(),
            milestone: game.reached_milestone(),
            result,
        }
    }

    fn marking(board: &MarkingBoard, report: Option<TurnReport>) -> Self {
        Reply::Marking {
            board: *board,
            outcome: board.winner(),
            report,
        }
    }
}

/// Drive one game through the `Game` trait, or report that it never started.
fn play<G: Game>(
    game: Option<&mut G>,
    kind: GameKind,
    action: G::Action,
    rng: &mut GameRng,
) -> EngineResult<G::Report> {
    let game = game.ok_or(EngineError::NoActiveGame(kind))?;
    game.apply(action, rng)
}

/// Session key to owned games.
pub struct SessionStore<K> {
    sessions: FxHashMap<K, Session>,
    rng: GameRng,
    config: MergeConfig,
}

impl<K: Hash + Eq + Clone + Debug> SessionStore<K> {
    /// Create a store whose sessions fork from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, MergeConfig::default())
    }

    /// Create a store with a custom merge configuration.
    #[must_use]
    pub fn with_config(seed: u64, config: MergeConfig) -> Self {
        Self {
            sessions: FxHashMap::default(),
            rng: GameRng::new(seed),
            config,
        }
    }

    /// Create a store seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let rng = GameRng::from_entropy();
        Self::new(rng.seed())
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    fn session_mut(&mut self, key: &K) -> &mut Session {
        let rng = &mut self.rng;
        self.sessions
            .entry(key.clone())
            .or_insert_with(|| Session::new(rng.fork()))
    }

    /// Start (or restart) the merge game for `key`.
    pub fn start_merge(&mut self, key: &K) -> &MergeGame {
        let config = self.config.clone();
        let session = self.session_mut(key);
        let game = MergeGame::new(config, &mut session.rng);
        info!(session = ?key, "merge game started");
        session.merge.insert(game)
    }

    /// Start (or restart) the marking game for `key`.
    pub fn start_marking(&mut self, key: &K) -> &MarkingBoard {
        let session = self.session_mut(key);
        info!(session = ?key, "marking game started");
        session.marking.insert(MarkingBoard::new())
    }

    /// Slide the merge board of `key`.
    pub fn move_merge(&mut self, key: &K, direction: Direction) -> EngineResult<MoveResult> {
        let session = self
            .sessions
            .get_mut(key)
            .ok_or(EngineError::NoActiveGame(GameKind::Merge))?;
        play(session.merge.as_mut(), GameKind::Merge, direction, &mut session.rng)
    }

    /// Mark a cell on the marking board of `key`.
    pub fn place_marking(&mut self, key: &K, row: usize, col: usize) -> EngineResult<TurnReport> {
        let session = self
            .sessions
            .get_mut(key)
            .ok_or(EngineError::NoActiveGame(GameKind::Marking))?;
        play(
            session.marking.as_mut(),
            GameKind::Marking,
            Cell::new(row, col),
            &mut session.rng,
        )
    }

    /// Handle one action and describe the resulting state.
    pub fn dispatch(&mut self, key: &K, action: PlayerAction) -> EngineResult<Reply> {
        match action {
            PlayerAction::StartMerge => {
                let game = self.start_merge(key);
                Ok(Reply::merge(game, None))
            }
            PlayerAction::StartMarking => {
                let board = self.start_marking(key);
                Ok(Reply::marking(board, None))
            }
            PlayerAction::Move(direction) => {
                let result = self.move_merge(key, direction)?;
                let game = self
                    .merge_game(key)
                    .ok_or(EngineError::NoActiveGame(GameKind::Merge))?;
                Ok(Reply::merge(game, Some(result)))
            }
            PlayerAction::Place(cell) => {
                let report = self.place_marking(key, cell.row, cell.col)?;
                let board = self
                    .marking_board(key)
                    .ok_or(EngineError::NoActiveGame(GameKind::Marking))?;
                Ok(Reply::marking(board, Some(report)))
            }
        }
    }

    pub fn session(&self, key: &K) -> Option<&Session> {
        self.sessions.get(key)
    }

    pub fn merge_game(&self, key: &K) -> Option<&MergeGame> {
        self.sessions.get(key)?.merge()
    }

    pub fn marking_board(&self, key: &K) -> Option<&MarkingBoard> {
        self.sessions.get(key)?.marking()
    }

    /// Drop every game `key` owns. Returns whether a session existed.
    pub fn end(&mut self, key: &K) -> bool {
        self.sessions.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
