//! Session store integration tests.
//!
//! These drive the store the way a chat front-end would: parse a callback
//! token, dispatch it, render the reply.

use rust_minigames::core::{EngineError, GameKind, MergeConfig};
use rust_minigames::games::{Direction, Mark};
use rust_minigames::render;
use rust_minigames::rules::{MergeStatus, Outcome};
use rust_minigames::session::{PlayerAction, Reply, SessionStore};

fn act(store: &mut SessionStore<u64>, key: u64, token: &str) -> Result<Reply, EngineError> {
    let action: PlayerAction = token.parse()?;
    store.dispatch(&key, action)
}

// =============================================================================
// Merge flow
// =============================================================================

/// Starting the merge game renders a 4x4 board with two tiles.
#[test]
fn test_start_merge_reply() {
    let mut store = SessionStore::new(42);

    let reply = act(&mut store, 1, "start_2048").unwrap();

    match reply {
        Reply::Merge { board, score, status, milestone, result } => {
            assert_eq!(board.empty_cells().len(), 14);
            assert_eq!(score, 0);
            assert_eq!(status, MergeStatus::InProgress);
            assert!(!milestone);
            assert_eq!(result, None);

            let text = render::merge_text(&board);
            assert_eq!(text.lines().count(), 4);
        }
        other => panic!("unexpected reply {:?}", other),
    }
}

/// Moves update the stored game; the reply mirrors it.
#[test]
fn test_merge_moves_are_stored() {
    let mut store = SessionStore::new(7);
    act(&mut store, 1, "start_2048").unwrap();

    for token in ["left", "up", "right", "down"] {
        let reply = act(&mut store, 1, token).unwrap();
        let game = store.merge_game(&1).unwrap();
        match reply {
            Reply::Merge { board, score, result, .. } => {
                assert_eq!(&board, game.board());
                assert_eq!(score, game.score());
                assert!(result.is_some());
            }
            other => panic!("unexpected reply {:?}", other),
        }
    }
}

/// Restarting throws the old merge board away.
#[test]
fn test_merge_restart() {
    let mut store = SessionStore::with_config(3, MergeConfig::new().with_seed_tiles(3));
    act(&mut store, 5, "start_2048").unwrap();
    for _ in 0..10 {
        for direction in Direction::ALL {
            store.move_merge(&5, direction).unwrap();
        }
    }

    act(&mut store, 5, "start_2048").unwrap();
    let game = store.merge_game(&5).unwrap();
    assert_eq!(game.board().empty_cells().len(), 13);
    assert_eq!(game.moves(), 0);
}

// =============================================================================
// Marking flow
// =============================================================================

/// A turn places both marks and reports the outcome.
#[test]
fn test_marking_turn() {
    let mut store = SessionStore::new(42);
    act(&mut store, 9, "start_xo").unwrap();

    let reply = act(&mut store, 9, "move_1_1").unwrap();

    match reply {
        Reply::Marking { board, outcome, report } => {
            assert_eq!(outcome, Outcome::InProgress);
            assert_eq!(board.count(Mark::Player), 1);
            assert_eq!(board.count(Mark::Opponent), 1);
            let report = report.unwrap();
            assert!(report.opponent_cell.is_some());

            let glyphs = render::marking_glyphs(&board);
            assert_eq!(glyphs[1][1], "❌");
        }
        other => panic!("unexpected reply {:?}", other),
    }
}

/// Rejected placements leave the stored board alone.
#[test]
fn test_marking_rejections() {
    let mut store = SessionStore::new(42);
    act(&mut store, 9, "start_xo").unwrap();
    act(&mut store, 9, "move_0_0").unwrap();
    let before = *store.marking_board(&9).unwrap();

    assert_eq!(
        act(&mut store, 9, "move_0_0"),
        Err(EngineError::CellOccupied { row: 0, col: 0 })
    );
    assert_eq!(
        act(&mut store, 9, "move_5_5"),
        Err(EngineError::OutOfBounds { row: 5, col: 5, side: 3 })
    );
    assert_eq!(store.marking_board(&9), Some(&before));
}

/// A marking game played to the end through the store stops accepting moves.
#[test]
fn test_marking_plays_out() {
    let mut store = SessionStore::new(1234);
    act(&mut store, 2, "start_xo").unwrap();

    let mut last = Outcome::InProgress;
    while !last.is_terminal() {
        let board = store.marking_board(&2).unwrap();
        let cell = board.empty_cells()[0];
        match store.dispatch(&2, PlayerAction::Place(cell)).unwrap() {
            Reply::Marking { outcome, .. } => last = outcome,
            other => panic!("unexpected reply {:?}", other),
        }
    }

    let board = store.marking_board(&2).unwrap();
    if let Some(&cell) = board.empty_cells().first() {
        assert_eq!(
            store.dispatch(&2, PlayerAction::Place(cell)),
            Err(EngineError::GameFinished)
        );
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Unknown tokens and unstarted games are reported, not panicked on.
#[test]
fn test_dispatch_errors() {
    let mut store = SessionStore::new(0);

    assert_eq!(
        act(&mut store, 1, "jump"),
        Err(EngineError::UnknownAction("jump".to_string()))
    );
    assert_eq!(
        act(&mut store, 1, "left"),
        Err(EngineError::NoActiveGame(GameKind::Merge))
    );
    assert_eq!(
        act(&mut store, 1, "move_0_0"),
        Err(EngineError::NoActiveGame(GameKind::Marking))
    );
    assert!(store.is_empty());
}

/// One player can have both games going at once.
#[test]
fn test_both_games_in_one_session() {
    let mut store = SessionStore::new(8);
    act(&mut store, 4, "start_2048").unwrap();
    act(&mut store, 4, "start_xo").unwrap();

    act(&mut store, 4, "move_2_2").unwrap();
    act(&mut store, 4, "left").unwrap();

    let session = store.session(&4).unwrap();
    assert!(session.merge().is_some());
    assert_eq!(session.marking().unwrap().count(Mark::Player), 1);
    assert_eq!(store.len(), 1);
}
