//! Hotseat tic-tac-toe - two players, one board, saved games.
//!
//! # Architecture
//!
//! - **Engine**: the rules and the move/reset state machine
//!   ([`hotseat_engine`], re-exported here)
//! - **Store**: durable key-value storage (SQLite or in-memory)
//! - **Persistence**: JSON save/load of the game state under a fixed key
//! - **Surface**: where cells and the status line are shown
//! - **Controller**: routes cell selections and resets through the engine,
//!   updates the surface, and saves per the configured policy
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{
//!     BoardView, GameController, MemoryStore, PersistenceAdapter, SavePolicy,
//! };
//!
//! let adapter = PersistenceAdapter::new(MemoryStore::new());
//! let mut controller = GameController::new(adapter, BoardView::new(), SavePolicy::AfterEveryMove);
//! controller.start();
//! assert_eq!(controller.surface().message(), "No saved game found");
//!
//! controller.select_cell(4);
//! assert_eq!(controller.surface().message(), "Player O's turn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod persistence;
mod store;
mod surface;

// Crate-level exports - Configuration
pub use config::{ConfigError, HotseatConfig};

// Crate-level exports - Controller
pub use controller::{GameController, SavePolicy, StartOutcome};

// Crate-level exports - Persistence
pub use persistence::{DEFAULT_SAVE_KEY, PersistenceAdapter, PersistenceError, SavedGame};

// Crate-level exports - Storage
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError};

// Crate-level exports - Rendering surface
pub use surface::{BoardView, RenderSurface, messages};

// Crate-level exports - Game engine
pub use hotseat_engine::{
    Board, Cell, GameEngine, GameState, GameStatus, IllegalMoveReason, Marker, MoveError,
    MoveOutcome, Position,
};
