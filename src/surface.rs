//! Rendering surface the game reports into, and the status texts it shows.

use hotseat_engine::{Board, Cell};

/// Where the game's visible state is written.
///
/// The controller only ever pushes values; it never reads them back.
pub trait RenderSurface {
    /// Shows `cell` at board index `index` (0-8).
    fn set_cell(&mut self, index: usize, cell: Cell);

    /// Replaces the status line.
    fn set_message(&mut self, message: &str);

    /// Shows every cell of `board`.
    fn show_board(&mut self, board: &Board) {
        for (index, cell) in board.cells().iter().enumerate() {
            self.set_cell(index, *cell);
        }
    }
}

/// Plain surface holding what should be on screen.
///
/// The terminal host draws from it; tests inspect it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    cells: [Cell; 9],
    message: String,
}

impl BoardView {
    /// Creates a blank view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell shown at `index`, or `None` off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All shown cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Current status line.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl RenderSurface for BoardView {
    fn set_cell(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
}

/// Status line texts.
pub mod messages {
    use hotseat_engine::{GameState, GameStatus, Marker};

    /// Shown when no usable saved game exists at startup.
    pub const NO_SAVED_GAME: &str = "No saved game found";

    /// Shown when a move ends in a draw.
    pub const DRAW: &str = "It's a draw!";

    /// Shown when a restored game had already ended in a draw.
    pub const RESTORED_DRAW: &str = "This game already ended in a draw!";

    /// Shown after an explicit save succeeds.
    pub const SAVED: &str = "Game saved";

    /// Whose turn it is.
    pub fn turn(marker: Marker) -> String {
        format!("Player {}'s turn", marker)
    }

    /// Shown when a move wins.
    pub fn won(marker: Marker) -> String {
        format!("Player {} wins!", marker)
    }

    /// Status line for a game just restored from storage.
    pub fn restored(state: &GameState) -> String {
        match state.status() {
            GameStatus::InProgress => turn(state.active_marker()),
            GameStatus::Won(marker) => format!("Player {} has already won!", marker),
            GameStatus::Draw => RESTORED_DRAW.to_string(),
        }
    }
}
