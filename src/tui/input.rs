//! Key bindings.

use crossterm::event::KeyCode;
use hotseat_tictactoe::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the highlight.
    MoveCursor(Position),
    /// Place the active marker.
    Select(Position),
    /// Start a new game.
    Reset,
    /// Save now.
    Save,
    /// Leave the program.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Maps a key to an action given the current cursor.
///
/// Arrows move the cursor, Enter/Space select it, digits 1-9 select a cell
/// directly (1 is top-left), `r` resets, `s` saves, `q`/Esc quit.
pub fn action_for(key: KeyCode, cursor: Position) -> Action {
    match key {
        KeyCode::Up => Action::MoveCursor(cursor.offset(-1, 0)),
        KeyCode::Down => Action::MoveCursor(cursor.offset(1, 0)),
        KeyCode::Left => Action::MoveCursor(cursor.offset(0, -1)),
        KeyCode::Right => Action::MoveCursor(cursor.offset(0, 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Select(cursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map_or(Action::Ignore, Action::Select),
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('s') => Action::Save,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Ignore,
    }
}
