//! Cache store accessor.
//!
//! [`KanjiStore`] is the narrow interface the lookup service uses to reach
//! the persistent `kanji_info` table. The Postgres implementation lives in
//! `kanjigo-db`; [`MemoryKanjiStore`] backs tests and database-less runs.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// One resolved lookup, owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanjiEntry {
    pub user_id: DbId,
    pub username: String,
    /// Per-user display sequence, assigned as `max + 1` at insert time.
    pub kanji_id: i64,
    pub character: String,
    pub meaning: String,
    pub created_at: Option<Timestamp>,
}

/// Insert payload for a new cache entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewKanjiEntry {
    pub user_id: DbId,
    pub username: String,
    pub kanji_id: i64,
    pub character: String,
    pub meaning: String,
}

/// Result of [`KanjiStore::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The row was written.
    Inserted(KanjiEntry),
    /// A row for the same `(user_id, character)` already existed; nothing was
    /// written and the stored row is returned.
    AlreadyPresent(KanjiEntry),
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Failure reaching or querying the store.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::StoreUnavailable(err.0)
    }
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Accessor over the per-user kanji cache.
///
/// Each method is an independent round trip; no transaction spans calls.
#[async_trait]
pub trait KanjiStore: Send + Sync {
    async fn find_by_user_and_character(
        &self,
        user_id: DbId,
        character: &str,
    ) -> Result<Option<KanjiEntry>, StoreError>;

    /// Highest `kanji_id` stored for the user, or 0 if they have no rows.
    async fn max_sequence_id(&self, user_id: DbId) -> Result<i64, StoreError>;

    async fn insert(&self, entry: &NewKanjiEntry) -> Result<InsertOutcome, StoreError>;

    /// All entries for the user ordered by `kanji_id` ascending.
    async fn list_by_user(&self, user_id: DbId) -> Result<Vec<KanjiEntry>, StoreError>;

    /// Liveness probe used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory implementation
// ---------------------------------------------------------------------------

/// A [`KanjiStore`] held entirely in process memory.
///
/// Enforces the same `(user_id, character)` uniqueness as the Postgres
/// table. [`set_available`](Self::set_available) simulates an outage.
#[derive(Debug)]
pub struct MemoryKanjiStore {
    rows: Mutex<Vec<KanjiEntry>>,
    available: AtomicBool,
}

impl MemoryKanjiStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Toggle whether calls succeed or fail with [`StoreError`].
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Total number of rows across all users.
    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.lock().await.is_empty()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError("memory store is unavailable".to_string()))
        }
    }
}

impl Default for MemoryKanjiStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KanjiStore for MemoryKanjiStore {
    async fn find_by_user_and_character(
        &self,
        user_id: DbId,
        character: &str,
    ) -> Result<Option<KanjiEntry>, StoreError> {
        self.check_available()?;
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .find(|r| r.user_id == user_id && r.character == character)
            .cloned())
    }

    async fn max_sequence_id(&self, user_id: DbId) -> Result<i64, StoreError> {
        self.check_available()?;
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| r.kanji_id)
            .max()
            .unwrap_or(0))
    }

    async fn insert(&self, entry: &NewKanjiEntry) -> Result<InsertOutcome, StoreError> {
        self.check_available()?;
        let mut rows = self.rows.lock().await;
        if let Some(existing) = rows
            .iter()
            .find(|r| r.user_id == entry.user_id && r.character == entry.character)
        {
            return Ok(InsertOutcome::AlreadyPresent(existing.clone()));
        }
        let row = KanjiEntry {
            user_id: entry.user_id,
            username: entry.username.clone(),
            kanji_id: entry.kanji_id,
            character: entry.character.clone(),
            meaning: entry.meaning.clone(),
            created_at: Some(chrono::Utc::now()),
        };
        rows.push(row.clone());
        Ok(InsertOutcome::Inserted(row))
    }

    async fn list_by_user(&self, user_id: DbId) -> Result<Vec<KanjiEntry>, StoreError> {
        self.check_available()?;
        let rows = self.rows.lock().await;
        let mut entries: Vec<KanjiEntry> =
            rows.iter().filter(|r| r.user_id == user_id).cloned().collect();
        entries.sort_by_key(|e| e.kanji_id);
        Ok(entries)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
