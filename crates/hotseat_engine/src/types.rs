//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A player's symbol. X always moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Marker {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Marker {
    /// Returns the other player's marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No marker placed yet.
    #[default]
    Empty,
    /// Cell holds a marker.
    Marked(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }

    /// Character shown for this cell; a space when empty.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(Marker::X) => 'X',
            Cell::Marked(Marker::O) => 'O',
        }
    }
}

/// 3x3 board stored in row-major order (index = row * 3 + col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from existing cell contents.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// True when `index` is on the board and holds no marker.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding a marker.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    /// Writes `marker` at `index`. Callers validate the index first.
    pub(crate) fn place(&mut self, index: usize, marker: Marker) {
        self.cells[index] = Cell::Marked(marker);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let [a, b, c] = [cells[0], cells[1], cells[2]].map(Cell::symbol);
            write!(f, "{a}|{b}|{c}")?;
        }
        Ok(())
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A marker completed a winning line.
    Won(Marker),
    /// Board filled with no winning line.
    Draw,
}

impl GameStatus {
    /// Won and Draw are terminal; only a reset leaves them.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning marker, when the game was won.
    pub fn winner(self) -> Option<Marker> {
        match self {
            GameStatus::Won(marker) => Some(marker),
            _ => None,
        }
    }
}

/// Board, whose turn it is, and the game status.
///
/// Once the status is terminal, `active_marker` keeps its last value so the
/// finished game can still be described ("Player X wins!").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) active_marker: Marker,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// A fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_marker: Marker::X,
            status: GameStatus::InProgress,
        }
    }

    /// Reassembles a state from stored parts.
    ///
    /// No rule checking happens here; loaders are expected to validate the
    /// combination before handing it to the engine.
    pub fn from_parts(board: Board, active_marker: Marker, status: GameStatus) -> Self {
        Self {
            board,
            active_marker,
            status,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker that moves next (or that moved last, once terminal).
    pub fn active_marker(&self) -> Marker {
        self.active_marker
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
