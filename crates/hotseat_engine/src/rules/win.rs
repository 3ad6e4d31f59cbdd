//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Marker};
use tracing::instrument;

/// Three board indices that win when they hold the same marker.
pub type WinningLine = [usize; 3];

/// Every winning line: three rows, three columns, two diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the marker holding a complete line, if any.
///
/// Stops at the first complete line in [`WINNING_LINES`] order.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Marker> {
    for [a, b, c] in WINNING_LINES {
        if let Some(Cell::Marked(marker)) = board.get(a)
            && board.get(b) == Some(Cell::Marked(marker))
            && board.get(c) == Some(Cell::Marked(marker))
        {
            return Some(marker);
        }
    }
    None
}

/// True when `marker` fills at least one winning line.
#[instrument(level = "trace")]
pub fn holds_line(board: &Board, marker: Marker) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(Cell::Marked(marker))))
}

/// True when any winning line is complete.
#[instrument(level = "trace")]
pub fn check_for_win(board: &Board) -> bool {
    winner(board).is_some()
}
