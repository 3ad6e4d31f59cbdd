//! The move/reset state machine.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::error::{IllegalMoveReason, MoveError};
use crate::rules;
use crate::types::{Board, GameState, GameStatus, Marker};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct MoveOutcome {
    /// Board after the move.
    board: Board,
    /// Status after the move.
    status: GameStatus,
    /// Marker that was just placed.
    mover: Marker,
    /// Set to the mover when this move won the game.
    winner: Option<Marker>,
}

impl MoveOutcome {
    /// True when this move ended the game.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Owns the authoritative [`GameState`] and applies the rules to it.
///
/// State changes only through [`apply_move`](Self::apply_move) and
/// [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine that resumes a previously stored state.
    #[instrument]
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places the active marker at `index` (0-8).
    ///
    /// After placing, the win check runs first, then the draw check. A win
    /// keeps the mover as the active marker; only a non-terminal move passes
    /// the turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IllegalMove`] when the game is over, the index
    /// is off the board, or the cell is occupied. State is left untouched.
    #[instrument(skip(self), fields(marker = %self.state.active_marker))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.state.status.is_terminal() {
            debug!(status = ?self.state.status, "Move after game end rejected");
            return Err(MoveError::IllegalMove(IllegalMoveReason::GameOver));
        }
        if index >= Board::SIZE {
            debug!("Move off the board rejected");
            return Err(MoveError::IllegalMove(IllegalMoveReason::OutOfRange(index)));
        }
        if !self.state.board.is_empty(index) {
            debug!("Move onto occupied cell rejected");
            return Err(MoveError::IllegalMove(IllegalMoveReason::Occupied(index)));
        }

        let mover = self.state.active_marker;
        self.state.board.place(index, mover);
        debug!(board = %self.state.board, "Marker placed");

        let winner = if rules::check_for_win(&self.state.board) {
            info!(winner = %mover, "Game won");
            self.state.status = GameStatus::Won(mover);
            Some(mover)
        } else if rules::is_full(&self.state.board) {
            info!("Game drawn");
            self.state.status = GameStatus::Draw;
            None
        } else {
            self.state.active_marker = mover.opponent();
            None
        };

        Ok(MoveOutcome {
            board: self.state.board,
            status: self.state.status,
            mover,
            winner,
        })
    }

    /// Clears the board, gives X the move and reopens the game.
    ///
    /// Allowed from any state, including mid-game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameState {
        debug!(previous = ?self.state.status, "Resetting game");
        self.state = GameState::new();
        self.state
    }
}
