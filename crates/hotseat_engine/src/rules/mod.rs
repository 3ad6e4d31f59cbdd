//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine runs the win
//! check before the draw check, so a move that both fills the board and
//! completes a line is a win.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, WinningLine, check_for_win, holds_line, winner};
