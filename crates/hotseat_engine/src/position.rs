//! Named board positions for keyboard navigation and display.

use crate::types::Board;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell on the board, named by row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Position {
    /// Index 0.
    TopLeft,
    /// Index 1.
    TopCenter,
    /// Index 2.
    TopRight,
    /// Index 3.
    MiddleLeft,
    /// Index 4.
    Center,
    /// Index 5.
    MiddleRight,
    /// Index 6.
    BottomLeft,
    /// Index 7.
    BottomCenter,
    /// Index 8.
    BottomRight,
}

impl Position {
    /// All positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Position for a board index, or `None` past 8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses an index ("0".."8") or a label, ignoring case.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }
        Self::iter().find(|pos| pos.label().eq_ignore_ascii_case(s))
    }

    /// Moves by whole rows and columns, stopping at the board edge.
    pub fn offset(self, rows: isize, cols: isize) -> Self {
        let row = (self.index() / 3) as isize;
        let col = (self.index() % 3) as isize;
        let row = (row + rows).clamp(0, 2) as usize;
        let col = (col + cols).clamp(0, 2) as usize;
        Self::ALL[row * 3 + col]
    }

    /// Positions whose cells are still empty.
    #[instrument(skip(board))]
    pub fn available(board: &Board) -> Vec<Self> {
        Self::iter().filter(|pos| board.is_empty(pos.index())).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
