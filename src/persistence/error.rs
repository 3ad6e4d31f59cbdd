//! Persistence error types.

use derive_more::Display;

/// Why a save or load did not complete.
///
/// None of these are fatal: a failed load means starting fresh, a failed
/// save means the in-memory game simply carries on.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PersistenceError {
    /// No saved game under the key.
    #[display("No saved game found")]
    NotFound,
    /// A record exists but cannot be turned back into a game.
    #[display("Saved game is corrupt: {}", _0)]
    Corrupt(String),
    /// The store rejected the write.
    #[display("Failed to save game: {}", _0)]
    WriteFailed(String),
    /// The store could not be read.
    #[display("Failed to read saved game: {}", _0)]
    ReadFailed(String),
}

impl std::error::Error for PersistenceError {}
