//! SQLite-backed store for saved games.

use chrono::Utc;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::store::models::NewSavedGame;
use crate::store::{KeyValueStore, StoreError, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Saved games in a SQLite file, one row per key.
///
/// Each operation opens its own connection, so the path must name a file;
/// `":memory:"` would lose the schema between calls.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: String,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `db_path` and applies
    /// pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path.as_ref()))]
    pub fn open(db_path: impl AsRef<str>) -> Result<Self, StoreError> {
        let store = Self {
            db_path: db_path.as_ref().to_string(),
        };
        let mut conn = store.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("Migrations failed: {}", e)))?;
        info!(path = %store.db_path, applied = applied.len(), "Saved-game store ready");
        Ok(store)
    }

    /// Path of the database file.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StoreError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| StoreError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }
}

impl KeyValueStore for SqliteStore {
    #[instrument(skip(self, blob), fields(bytes = blob.len()))]
    fn write(&mut self, key: &str, blob: &str) -> Result<(), StoreError> {
        let mut conn = self.connection()?;
        let row = NewSavedGame::new(key, blob, Utc::now().naive_utc());

        diesel::replace_into(schema::saved_games::table)
            .values(&row)
            .execute(&mut conn)?;

        debug!("Saved game written");
        Ok(())
    }

    #[instrument(skip(self))]
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection()?;

        let payload = schema::saved_games::table
            .filter(schema::saved_games::save_key.eq(key))
            .select(schema::saved_games::payload)
            .first::<String>(&mut conn)
            .optional()?;

        debug!(found = payload.is_some(), "Saved game read");
        Ok(payload)
    }
}
