//! Database models for saved games.

use chrono::NaiveDateTime;
use derive_new::new;
use diesel::prelude::*;

use crate::store::schema;

/// Row written for each save; replaces any row with the same key.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::saved_games)]
pub struct NewSavedGame<'a> {
    save_key: &'a str,
    payload: &'a str,
    saved_at: NaiveDateTime,
}
