//! Tests for saving and restoring games.

use hotseat_tictactoe::{
    GameEngine, GameState, GameStatus, KeyValueStore, Marker, MemoryStore, PersistenceAdapter,
    PersistenceError, StoreError,
};

/// Store whose every operation fails.
#[derive(Debug, Default)]
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn write(&mut self, _key: &str, _blob: &str) -> Result<(), StoreError> {
        Err(StoreError::new("disk full"))
    }

    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::new("disk unreadable"))
    }
}

fn played(moves: &[usize]) -> GameState {
    let mut engine = GameEngine::new();
    for &index in moves {
        engine.apply_move(index).expect("Legal move");
    }
    *engine.state()
}

#[test]
fn test_load_empty_store_is_not_found() {
    let adapter = PersistenceAdapter::new(MemoryStore::new());
    assert_eq!(adapter.load(), Err(PersistenceError::NotFound));
}

#[test]
fn test_round_trip_in_progress() {
    let mut adapter = PersistenceAdapter::new(MemoryStore::new());
    let state = played(&[4, 0, 8]);
    adapter.save(&state).expect("Save failed");
    assert_eq!(adapter.load(), Ok(state));
}

#[test]
fn test_round_trip_keeps_won_and_draw_apart() {
    let won = played(&[0, 3, 1, 4, 2]);
    let draw = played(&[0, 1, 2, 3, 5, 4, 6, 8, 7]);
    assert_eq!(won.status(), GameStatus::Won(Marker::X));
    assert_eq!(draw.status(), GameStatus::Draw);

    let mut adapter = PersistenceAdapter::new(MemoryStore::new());
    for state in [won, draw] {
        adapter.save(&state).expect("Save failed");
        assert_eq!(adapter.load(), Ok(state));
    }
}

#[test]
fn test_save_overwrites_single_key() {
    let mut adapter = PersistenceAdapter::with_key(MemoryStore::new(), "slot");
    adapter.save(&played(&[4])).expect("Save failed");
    adapter.save(&played(&[4, 0])).expect("Save failed");

    assert_eq!(adapter.store().len(), 1);
    assert_eq!(adapter.load(), Ok(played(&[4, 0])));
}

#[test]
fn test_corrupt_payload() {
    let mut store = MemoryStore::new();
    store.write("TicTacToeGame", "{not json").unwrap();
    let adapter = PersistenceAdapter::new(store);
    assert!(matches!(adapter.load(), Err(PersistenceError::Corrupt(_))));
}

#[test]
fn test_store_faults_are_reported() {
    let mut adapter = PersistenceAdapter::new(BrokenStore);
    let save = adapter.save(&GameState::new());
    assert!(matches!(save, Err(PersistenceError::WriteFailed(ref m)) if m == "disk full"));
    assert!(matches!(adapter.load(), Err(PersistenceError::ReadFailed(_))));
}
