//! Kanji cache row model.

use kanjigo_core::store::KanjiEntry;
use kanjigo_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `kanji_info` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KanjiInfo {
    pub id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub kanji_id: i64,
    pub kanji_character: String,
    pub meaning: String,
    pub created_at: Timestamp,
}

impl From<KanjiInfo> for KanjiEntry {
    fn from(row: KanjiInfo) -> Self {
        KanjiEntry {
            user_id: row.user_id,
            username: row.username,
            kanji_id: row.kanji_id,
            character: row.kanji_character,
            meaning: row.meaning,
            created_at: Some(row.created_at),
        }
    }
}
