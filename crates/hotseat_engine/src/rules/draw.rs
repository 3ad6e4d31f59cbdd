//! Draw detection logic for tic-tac-toe.

use super::win::check_for_win;
use crate::{Board, Cell};
use tracing::instrument;

/// True when every cell holds a marker.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

/// A full board with no complete line.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !check_for_win(board)
}
