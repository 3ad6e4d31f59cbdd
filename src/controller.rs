//! Wires input events to the engine, the surface and persistence.

use hotseat_engine::{Board, Cell, GameEngine, GameState, GameStatus, MoveOutcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::persistence::{PersistenceAdapter, PersistenceError};
use crate::store::KeyValueStore;
use crate::surface::{RenderSurface, messages};

/// When the game is written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavePolicy {
    /// Only on an explicit save request.
    Manual,
    /// After every accepted move and after every reset.
    #[default]
    AfterEveryMove,
}

/// How startup went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// A saved game was restored and shown.
    Restored,
    /// Nothing usable was saved; the game starts fresh.
    Fresh(PersistenceError),
}

/// Single-threaded controller for one game.
///
/// Every call runs to completion, storage included, before returning.
#[derive(Debug)]
pub struct GameController<S, R> {
    engine: GameEngine,
    persistence: PersistenceAdapter<S>,
    surface: R,
    save_policy: SavePolicy,
}

impl<S: KeyValueStore, R: RenderSurface> GameController<S, R> {
    /// Creates a controller around a fresh game.
    pub fn new(persistence: PersistenceAdapter<S>, surface: R, save_policy: SavePolicy) -> Self {
        Self {
            engine: GameEngine::new(),
            persistence,
            surface,
            save_policy,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// The surface being written to.
    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// The persistence adapter.
    pub fn persistence(&self) -> &PersistenceAdapter<S> {
        &self.persistence
    }

    /// Active save policy.
    pub fn save_policy(&self) -> SavePolicy {
        self.save_policy
    }

    /// Restores the saved game, if any, and shows it.
    ///
    /// Missing, corrupt or unreadable saves never block startup: the engine
    /// keeps its fresh state and the surface says no saved game was found.
    #[instrument(skip(self), fields(key = %self.persistence.key()))]
    pub fn start(&mut self) -> StartOutcome {
        match self.persistence.load() {
            Ok(state) => {
                self.engine = GameEngine::from_state(state);
                self.surface.show_board(state.board());
                self.surface.set_message(&messages::restored(&state));
                StartOutcome::Restored
            }
            Err(err) => {
                match &err {
                    PersistenceError::NotFound => info!("No saved game, starting fresh"),
                    other => warn!(error = %other, "Saved game unusable, starting fresh"),
                }
                self.surface.set_message(messages::NO_SAVED_GAME);
                StartOutcome::Fresh(err)
            }
        }
    }

    /// Handles a cell selection.
    ///
    /// Illegal selections (occupied cell, finished game, bad index) are
    /// ignored and return `None` without touching the surface.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Option<MoveOutcome> {
        let outcome = match self.engine.apply_move(index) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(error = %err, "Selection ignored");
                return None;
            }
        };

        self.surface.set_cell(index, Cell::Marked(*outcome.mover()));
        let message = match outcome.status() {
            GameStatus::Won(marker) => messages::won(*marker),
            GameStatus::Draw => messages::DRAW.to_string(),
            GameStatus::InProgress => messages::turn(self.engine.state().active_marker()),
        };
        self.surface.set_message(&message);
        if outcome.is_terminal() {
            info!(status = ?outcome.status(), "Game finished");
        }

        if self.save_policy == SavePolicy::AfterEveryMove {
            self.autosave();
        }
        Some(outcome)
    }

    /// Starts over: empty board, X to move, blank status line.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameState {
        let state = self.engine.reset();
        self.surface.show_board(&Board::new());
        self.surface.set_message("");
        if self.save_policy == SavePolicy::AfterEveryMove {
            self.autosave();
        }
        state
    }

    /// Saves now, regardless of policy, and reports the result on the
    /// status line.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::WriteFailed`] when the store rejects the
    /// write; the game itself continues unchanged.
    #[instrument(skip(self))]
    pub fn save(&mut self) -> Result<(), PersistenceError> {
        let state = *self.engine.state();
        match self.persistence.save(&state) {
            Ok(()) => {
                self.surface.set_message(messages::SAVED);
                Ok(())
            }
            Err(err) => {
                self.surface.set_message(&err.to_string());
                Err(err)
            }
        }
    }

    fn autosave(&mut self) {
        let state = *self.engine.state();
        if let Err(err) = self.persistence.save(&state) {
            warn!(error = %err, "Autosave failed, continuing in memory");
        }
    }
}
