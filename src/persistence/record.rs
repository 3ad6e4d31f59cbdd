//! JSON layout of a saved game.
//!
//! Field names and the `" "` empty-cell encoding match the save format the
//! browser version of this game wrote, so old saves keep loading:
//!
//! ```json
//! {"currentMarker":"O","boardState":["X"," "," "," "," "," "," "," "," "],"gameActive":true}
//! ```
//!
//! Only an active/finished flag is stored. Won and Draw are told apart on
//! load by re-running the rules, which is exact because a win always takes
//! precedence over a full board.

use hotseat_engine::{Board, Cell, GameState, GameStatus, Marker, rules};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::persistence::PersistenceError;

/// One cell as written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum StoredCell {
    #[serde(rename = " ")]
    Empty,
    X,
    O,
}

impl From<Cell> for StoredCell {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => StoredCell::Empty,
            Cell::Marked(Marker::X) => StoredCell::X,
            Cell::Marked(Marker::O) => StoredCell::O,
        }
    }
}

impl From<StoredCell> for Cell {
    fn from(cell: StoredCell) -> Self {
        match cell {
            StoredCell::Empty => Cell::Empty,
            StoredCell::X => Cell::Marked(Marker::X),
            StoredCell::O => Cell::Marked(Marker::O),
        }
    }
}

/// Serialized form of a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    current_marker: Marker,
    board_state: [StoredCell; 9],
    game_active: bool,
}

impl SavedGame {
    /// Captures a game state.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            current_marker: state.active_marker(),
            board_state: (*state.board().cells()).map(StoredCell::from),
            game_active: state.is_active(),
        }
    }

    /// Whether the saved game still accepts moves.
    pub fn game_active(&self) -> bool {
        self.game_active
    }

    /// Serializes to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::WriteFailed`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        serde_json::to_string(self).map_err(|e| PersistenceError::WriteFailed(e.to_string()))
    }

    /// Parses JSON produced by [`to_json`](Self::to_json) or by the browser
    /// version of the game.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Corrupt`] for malformed JSON, unknown
    /// markers or a board that is not exactly nine cells.
    #[instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        serde_json::from_str(json).map_err(|e| PersistenceError::Corrupt(e.to_string()))
    }

    /// Rebuilds the game state, recovering Won vs Draw from the board.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Corrupt`] when the record could not have
    /// come from legal play: mark counts out of turn order, an active game
    /// that is already decided, a finished game that is neither won nor
    /// full, lines for both markers, or a winner or current marker that is
    /// not the player who moved last.
    #[instrument(skip(self), fields(active = self.game_active))]
    pub fn into_state(self) -> Result<GameState, PersistenceError> {
        let board = Board::from_cells(self.board_state.map(Cell::from));
        let last_mover = last_mover(&board)?;
        let winner = rules::winner(&board);
        let full = rules::is_full(&board);

        let (status, expected_marker) = match (self.game_active, winner) {
            (true, Some(marker)) => {
                return Err(PersistenceError::Corrupt(format!(
                    "game marked active but {} already has a line",
                    marker
                )));
            }
            (true, None) if full => {
                return Err(PersistenceError::Corrupt(
                    "game marked active but the board is full".to_string(),
                ));
            }
            (true, None) => (GameStatus::InProgress, last_mover.opponent()),
            (false, Some(marker)) if rules::holds_line(&board, marker.opponent()) => {
                return Err(PersistenceError::Corrupt(
                    "both X and O hold a winning line".to_string(),
                ));
            }
            (false, Some(marker)) => (GameStatus::Won(marker), last_mover),
            (false, None) if full => (GameStatus::Draw, last_mover),
            (false, None) => {
                return Err(PersistenceError::Corrupt(
                    "game marked finished but nobody won and the board has space".to_string(),
                ));
            }
        };

        if let Some(winner) = status.winner()
            && winner != last_mover
        {
            return Err(PersistenceError::Corrupt(format!(
                "{} holds the winning line but {} moved last",
                winner, last_mover
            )));
        }
        if self.current_marker != expected_marker {
            return Err(PersistenceError::Corrupt(format!(
                "current marker is {} but the board says {}",
                self.current_marker, expected_marker
            )));
        }

        Ok(GameState::from_parts(board, self.current_marker, status))
    }
}

/// Marker that placed the latest mark, judged by mark counts.
///
/// X moves first, so legal play leaves X with the same number of marks as O
/// (O moved last) or exactly one more (X moved last). On an empty board this
/// reports O, which makes X the next to move.
fn last_mover(board: &Board) -> Result<Marker, PersistenceError> {
    let count = |marker| {
        board
            .cells()
            .iter()
            .filter(|cell| cell.marker() == Some(marker))
            .count()
    };
    let (x_count, o_count) = (count(Marker::X), count(Marker::O));
    match x_count.checked_sub(o_count) {
        Some(0) => Ok(Marker::O),
        Some(1) => Ok(Marker::X),
        _ => Err(PersistenceError::Corrupt(format!(
            "board holds {} X and {} O marks",
            x_count, o_count
        ))),
    }
}
