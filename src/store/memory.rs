//! In-memory store.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::store::{KeyValueStore, StoreError};

/// Keeps blobs in a `HashMap`. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    #[instrument(skip(self, blob), fields(bytes = blob.len()))]
    fn write(&mut self, key: &str, blob: &str) -> Result<(), StoreError> {
        debug!("Writing entry");
        self.entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    #[instrument(skip(self))]
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entry = self.entries.get(key).cloned();
        debug!(found = entry.is_some(), "Read entry");
        Ok(entry)
    }
}
