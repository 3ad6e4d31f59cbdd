//! Pure tic-tac-toe game logic for two players sharing one board.
//!
//! The engine is a small synchronous state machine:
//!
//! - [`GameEngine::apply_move`] places the active marker, then checks for a
//!   win, then for a draw, and otherwise hands the turn to the other marker.
//! - [`GameEngine::reset`] returns to a fresh game from any state.
//!
//! Nothing here performs I/O. Persistence and rendering live in the host
//! crate and talk to the engine through [`GameState`].
//!
//! # Example
//!
//! ```
//! use hotseat_engine::{GameEngine, GameStatus, Marker};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index).unwrap();
//! }
//! assert_eq!(engine.state().status(), GameStatus::Won(Marker::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod position;
pub mod rules;
mod types;

pub use engine::{GameEngine, MoveOutcome};
pub use error::{IllegalMoveReason, MoveError};
pub use position::Position;
pub use rules::{WINNING_LINES, WinningLine};
pub use types::{Board, Cell, GameState, GameStatus, Marker};
