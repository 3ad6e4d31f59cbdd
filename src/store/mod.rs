//! Durable key-value storage for saved games.

mod error;
mod memory;
mod models;
mod schema; // Diesel schema - internal use only
mod sqlite;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// A key-value store holding one serialized blob per key.
///
/// Writes overwrite unconditionally. Reads return `None` for a key that was
/// never written.
pub trait KeyValueStore {
    /// Stores `blob` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the underlying storage rejects the write.
    fn write(&mut self, key: &str, blob: &str) -> Result<(), StoreError>;

    /// Reads the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the underlying storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
}
