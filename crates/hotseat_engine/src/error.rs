//! Move rejection errors.

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveReason {
    /// Index is not in 0..=8.
    #[display("cell {} is outside the board (0-8)", _0)]
    OutOfRange(usize),
    /// Cell already holds a marker.
    #[display("cell {} is already occupied", _0)]
    Occupied(usize),
    /// Game already ended in a win or draw.
    #[display("game is already over")]
    GameOver,
}

/// Error returned by [`crate::GameEngine::apply_move`].
///
/// A rejected move never changes state, so callers may simply ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move breaks a rule and was not applied.
    #[display("Illegal move: {}", _0)]
    IllegalMove(IllegalMoveReason),
}

impl MoveError {
    /// The underlying reason for the rejection.
    pub fn reason(&self) -> IllegalMoveReason {
        match self {
            MoveError::IllegalMove(reason) => *reason,
        }
    }
}

impl std::error::Error for MoveError {}
