//! Tests for the game controller: startup, moves, resets and saving.

use hotseat_tictactoe::{
    BoardView, Cell, GameController, GameState, GameStatus, KeyValueStore, Marker, MemoryStore,
    PersistenceAdapter, PersistenceError, SavePolicy, StartOutcome, StoreError, messages,
};

#[derive(Debug, Default)]
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn write(&mut self, _key: &str, _blob: &str) -> Result<(), StoreError> {
        Err(StoreError::new("read-only"))
    }

    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }
}

fn controller_with(store: MemoryStore, policy: SavePolicy) -> GameController<MemoryStore, BoardView> {
    GameController::new(PersistenceAdapter::new(store), BoardView::new(), policy)
}

fn store_with(json: &str) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.write("TicTacToeGame", json).unwrap();
    store
}

#[test]
fn test_start_without_save() {
    let mut controller = controller_with(MemoryStore::new(), SavePolicy::Manual);
    assert_eq!(controller.start(), StartOutcome::Fresh(PersistenceError::NotFound));
    assert_eq!(controller.surface().message(), messages::NO_SAVED_GAME);
    assert_eq!(controller.state(), &GameState::new());
    assert!(controller.surface().cells().iter().all(|cell| *cell == Cell::Empty));
}

#[test]
fn test_start_with_corrupt_save_starts_fresh() {
    let mut controller = controller_with(store_with("garbage"), SavePolicy::Manual);
    assert!(matches!(controller.start(), StartOutcome::Fresh(PersistenceError::Corrupt(_))));
    assert_eq!(controller.surface().message(), "No saved game found");
    assert_eq!(controller.state(), &GameState::new());
}

#[test]
fn test_start_restores_in_progress_game() {
    let json = r#"{"currentMarker":"O","boardState":["X"," "," "," "," "," "," "," "," "],"gameActive":true}"#;
    let mut controller = controller_with(store_with(json), SavePolicy::Manual);
    assert_eq!(controller.start(), StartOutcome::Restored);
    assert_eq!(controller.surface().message(), "Player O's turn");
    assert_eq!(controller.surface().cell(0), Some(Cell::Marked(Marker::X)));

    controller.select_cell(4).expect("Legal move");
    assert_eq!(controller.surface().cell(4), Some(Cell::Marked(Marker::O)));
}

#[test]
fn test_start_restores_finished_games_with_matching_message() {
    let won = r#"{"currentMarker":"X","boardState":["X","X","X","O","O"," "," "," "," "],"gameActive":false}"#;
    let mut controller = controller_with(store_with(won), SavePolicy::Manual);
    controller.start();
    assert_eq!(controller.surface().message(), "Player X has already won!");
    assert!(controller.select_cell(8).is_none());

    let draw = r#"{"currentMarker":"X","boardState":["X","O","X","O","O","X","X","X","O"],"gameActive":false}"#;
    let mut controller = controller_with(store_with(draw), SavePolicy::Manual);
    controller.start();
    assert_eq!(controller.state().status(), GameStatus::Draw);
    assert_eq!(controller.surface().message(), messages::RESTORED_DRAW);
}

#[test]
fn test_moves_update_surface() {
    let mut controller = controller_with(MemoryStore::new(), SavePolicy::Manual);
    controller.start();

    controller.select_cell(0).expect("Legal move");
    assert_eq!(controller.surface().cell(0), Some(Cell::Marked(Marker::X)));
    assert_eq!(controller.surface().message(), "Player O's turn");

    for index in [3, 1, 4] {
        controller.select_cell(index).expect("Legal move");
    }
    let outcome = controller.select_cell(2).expect("Legal move");
    assert_eq!(*outcome.winner(), Some(Marker::X));
    assert_eq!(controller.surface().message(), "Player X wins!");
}

#[test]
fn test_draw_message() {
    let mut controller = controller_with(MemoryStore::new(), SavePolicy::Manual);
    for index in [0, 1, 2, 3, 5, 4, 6, 8, 7] {
        controller.select_cell(index).expect("Legal move");
    }
    assert_eq!(controller.surface().message(), "It's a draw!");
}

#[test]
fn test_illegal_selection_is_silent() {
    let mut controller = controller_with(MemoryStore::new(), SavePolicy::Manual);
    controller.select_cell(4).expect("Legal move");
    let view = controller.surface().clone();
    let state = *controller.state();

    assert!(controller.select_cell(4).is_none());
    assert!(controller.select_cell(9).is_none());
    assert_eq!(controller.surface(), &view);
    assert_eq!(controller.state(), &state);
}

#[test]
fn test_reset_clears_surface() {
    let mut controller = controller_with(MemoryStore::new(), SavePolicy::Manual);
    for index in [0, 3, 1, 4, 2] {
        controller.select_cell(index);
    }
    let fresh = controller.reset();
    assert_eq!(fresh, GameState::new());
    assert_eq!(controller.surface(), &BoardView::new());
    assert!(controller.select_cell(0).is_some());
}

#[test]
fn test_manual_policy_saves_only_on_request() {
    let mut controller = controller_with(MemoryStore::new(), SavePolicy::Manual);
    controller.select_cell(4);
    assert!(controller.persistence().store().is_empty());

    controller.save().expect("Save failed");
    assert_eq!(controller.surface().message(), messages::SAVED);
    assert_eq!(controller.persistence().load(), Ok(*controller.state()));
}

#[test]
fn test_autosave_tracks_every_move_and_reset() {
    let mut controller = controller_with(MemoryStore::new(), SavePolicy::AfterEveryMove);
    controller.select_cell(4);
    assert_eq!(controller.persistence().load(), Ok(*controller.state()));

    controller.select_cell(0);
    assert_eq!(controller.persistence().load(), Ok(*controller.state()));

    controller.reset();
    assert_eq!(controller.persistence().load(), Ok(GameState::new()));
}

#[test]
fn test_saved_game_resumes_in_new_controller() {
    let mut first = controller_with(MemoryStore::new(), SavePolicy::AfterEveryMove);
    for index in [0, 4, 8] {
        first.select_cell(index);
    }
    let store = first.persistence().store().clone();

    let mut second = controller_with(store, SavePolicy::AfterEveryMove);
    assert_eq!(second.start(), StartOutcome::Restored);
    assert_eq!(second.state(), first.state());
    assert_eq!(second.surface().cells(), first.surface().cells());
}

#[test]
fn test_failed_save_keeps_game_going() {
    let adapter = PersistenceAdapter::new(BrokenStore);
    let mut controller = GameController::new(adapter, BoardView::new(), SavePolicy::AfterEveryMove);
    controller.start();

    assert!(controller.select_cell(4).is_some());
    assert_eq!(controller.state().board().filled_count(), 1);

    let err = controller.save().unwrap_err();
    assert!(matches!(err, PersistenceError::WriteFailed(_)));
    assert!(controller.surface().message().starts_with("Failed to save game"));
    assert!(controller.select_cell(0).is_some());
}

#[test]
fn test_start_with_out_of_turn_save_starts_fresh() {
    let json = r#"{"currentMarker":"X","boardState":["X","X"," "," "," "," "," "," "," "],"gameActive":true}"#;
    let mut controller = controller_with(store_with(json), SavePolicy::Manual);
    assert!(matches!(controller.start(), StartOutcome::Fresh(PersistenceError::Corrupt(_))));
    assert_eq!(controller.state(), &GameState::new());
    assert_eq!(controller.surface().message(), messages::NO_SAVED_GAME);

    controller.select_cell(2).expect("Legal move");
    assert_eq!(controller.state().status(), GameStatus::InProgress);
}
