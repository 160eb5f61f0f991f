//! Postgres-backed [`KanjiStore`].

use async_trait::async_trait;
use kanjigo_core::store::{InsertOutcome, KanjiEntry, KanjiStore, NewKanjiEntry, StoreError};
use kanjigo_core::types::DbId;

use crate::repositories::KanjiInfoRepo;
use crate::DbPool;

/// [`KanjiStore`] over the `kanji_info` table.
///
/// Owns a handle to the pool; the pool itself is created and closed by the
/// process entrypoint.
#[derive(Debug, Clone)]
pub struct PgKanjiStore {
    pool: DbPool,
}

impl PgKanjiStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn store_error(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "kanji_info query failed");
    StoreError(err.to_string())
}

#[async_trait]
impl KanjiStore for PgKanjiStore {
    async fn find_by_user_and_character(
        &self,
        user_id: DbId,
        character: &str,
    ) -> Result<Option<KanjiEntry>, StoreError> {
        let row = KanjiInfoRepo::find_by_user_and_character(&self.pool, user_id, character)
            .await
            .map_err(store_error)?;
        Ok(row.map(KanjiEntry::from))
    }

    async fn max_sequence_id(&self, user_id: DbId) -> Result<i64, StoreError> {
        KanjiInfoRepo::max_kanji_id(&self.pool, user_id)
            .await
            .map_err(store_error)
    }

    async fn insert(&self, entry: &NewKanjiEntry) -> Result<InsertOutcome, StoreError> {
        let inserted = KanjiInfoRepo::insert(
            &self.pool,
            entry.user_id,
            &entry.username,
            entry.kanji_id,
            &entry.character,
            &entry.meaning,
        )
        .await
        .map_err(store_error)?;

        if let Some(row) = inserted {
            return Ok(InsertOutcome::Inserted(row.into()));
        }

        // Conflict on (user_id, kanji_character): hand back the winner.
        let existing =
            KanjiInfoRepo::find_by_user_and_character(&self.pool, entry.user_id, &entry.character)
                .await
                .map_err(store_error)?
                .ok_or_else(|| {
                    StoreError(format!(
                        "kanji_info row for user {} and '{}' vanished after conflict",
                        entry.user_id, entry.character
                    ))
                })?;
        Ok(InsertOutcome::AlreadyPresent(existing.into()))
    }

    async fn list_by_user(&self, user_id: DbId) -> Result<Vec<KanjiEntry>, StoreError> {
        let rows = KanjiInfoRepo::list_by_user(&self.pool, user_id)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(KanjiEntry::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await.map_err(store_error)
    }
}
