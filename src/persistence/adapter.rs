//! Save/load of the game state under a fixed key.

use hotseat_engine::GameState;
use tracing::{debug, info, instrument, warn};

use crate::persistence::{PersistenceError, SavedGame};
use crate::store::KeyValueStore;

/// Key the browser version of the game saved under.
pub const DEFAULT_SAVE_KEY: &str = "TicTacToeGame";

/// Serializes game state into a [`KeyValueStore`] and back.
#[derive(Debug, Clone)]
pub struct PersistenceAdapter<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    /// Creates an adapter using [`DEFAULT_SAVE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_SAVE_KEY)
    }

    /// Creates an adapter saving under `key`.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Key used for every save and load.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes `state`, overwriting any earlier save.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::WriteFailed`] if the store rejects the
    /// write. The caller's in-memory game is unaffected either way.
    #[instrument(skip(self, state), fields(key = %self.key, status = ?state.status()))]
    pub fn save(&mut self, state: &GameState) -> Result<(), PersistenceError> {
        let json = SavedGame::from_state(state).to_json()?;
        self.store.write(&self.key, &json).map_err(|e| {
            warn!(error = %e, "Saving game failed");
            PersistenceError::WriteFailed(e.message)
        })?;
        info!("Game saved");
        Ok(())
    }

    /// Reads and rebuilds the saved game.
    ///
    /// # Errors
    ///
    /// - [`PersistenceError::NotFound`] when nothing is saved under the key.
    /// - [`PersistenceError::Corrupt`] when the record cannot be parsed or
    ///   contradicts the rules.
    /// - [`PersistenceError::ReadFailed`] when the store itself fails.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load(&self) -> Result<GameState, PersistenceError> {
        let json = self
            .store
            .read(&self.key)
            .map_err(|e| PersistenceError::ReadFailed(e.message))?
            .ok_or(PersistenceError::NotFound)?;
        let record = SavedGame::from_json(&json)?;
        debug!(bytes = json.len(), active = record.game_active(), "Saved game found");

        let state = record.into_state()?;
        info!(
            marker = %state.active_marker(),
            status = ?state.status(),
            filled = state.board().filled_count(),
            "Game restored"
        );
        Ok(state)
    }
}
