//! Saving and restoring games through a [`KeyValueStore`](crate::KeyValueStore).

mod adapter;
mod error;
mod record;

pub use adapter::{DEFAULT_SAVE_KEY, PersistenceAdapter};
pub use error::PersistenceError;
pub use record::SavedGame;
