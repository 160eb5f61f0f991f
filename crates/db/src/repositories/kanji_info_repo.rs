//! Repository for the `kanji_info` table.
//!
//! Rows are keyed by `(user_id, kanji_character)`; `kanji_id` is a per-user
//! display sequence, not a primary key.

use kanjigo_core::types::DbId;
use sqlx::PgPool;

use crate::models::kanji_info::KanjiInfo;

/// Column list for `kanji_info` queries.
const COLUMNS: &str = "\
    id, user_id, username, kanji_id, kanji_character, meaning, created_at";

/// Provides data access for cached kanji lookups.
pub struct KanjiInfoRepo;

impl KanjiInfoRepo {
    /// Find the cached row for a user and character.
    pub async fn find_by_user_and_character(
        pool: &PgPool,
        user_id: DbId,
        character: &str,
    ) -> Result<Option<KanjiInfo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM kanji_info \
             WHERE user_id = $1 AND kanji_character = $2"
        );
        sqlx::query_as::<_, KanjiInfo>(&query)
            .bind(user_id)
            .bind(character)
            .fetch_optional(pool)
            .await
    }

    /// Highest `kanji_id` for the user, or 0 if they have no rows.
    pub async fn max_kanji_id(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let (max,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(MAX(kanji_id), 0)::BIGINT FROM kanji_info WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(max)
    }

    /// Insert a row unless the `(user_id, kanji_character)` pair exists.
    ///
    /// Returns `None` when the unique constraint suppressed the insert.
    pub async fn insert(
        pool: &PgPool,
        user_id: DbId,
        username: &str,
        kanji_id: i64,
        character: &str,
        meaning: &str,
    ) -> Result<Option<KanjiInfo>, sqlx::Error> {
        let query = format!(
            "INSERT INTO kanji_info \
                 (user_id, username, kanji_id, kanji_character, meaning) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (user_id, kanji_character) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, KanjiInfo>(&query)
            .bind(user_id)
            .bind(username)
            .bind(kanji_id)
            .bind(character)
            .bind(meaning)
            .fetch_optional(pool)
            .await
    }

    /// List a user's rows ordered by `kanji_id`.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<KanjiInfo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM kanji_info \
             WHERE user_id = $1 \
             ORDER BY kanji_id ASC, id ASC"
        );
        sqlx::query_as::<_, KanjiInfo>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
