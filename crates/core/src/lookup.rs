//! Read-through kanji lookup.
//!
//! [`LookupService::resolve`] checks the per-user cache, falls back to the
//! dictionary provider on a miss, persists the answer and returns it. Each
//! step runs sequentially within a request; nothing is retried.

use std::sync::Arc;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::CoreError;
use crate::kanji::{validate_kanji, RANDOM_TEST_KANJI};
use crate::provider::MeaningProvider;
use crate::store::{InsertOutcome, KanjiEntry, KanjiStore, NewKanjiEntry};
use crate::types::DbId;

/// Meaning reported by the random test lookup when the provider has none.
pub const UNKNOWN_MEANING: &str = "Unknown";

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Where a lookup's meaning was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSource {
    Cache,
    Api,
}

impl LookupSource {
    pub fn as_str(self) -> &'static str {
        match self {
            LookupSource::Cache => "cache",
            LookupSource::Api => "api",
        }
    }
}

/// Outcome of a successful [`LookupService::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub character: String,
    pub meaning: String,
    pub source: LookupSource,
    pub kanji_id: i64,
}

impl LookupResult {
    fn from_entry(entry: KanjiEntry, source: LookupSource) -> Self {
        Self {
            character: entry.character,
            meaning: entry.meaning,
            source,
            kanji_id: entry.kanji_id,
        }
    }

    pub fn cached(&self) -> bool {
        self.source == LookupSource::Cache
    }
}

/// Outcome of [`LookupService::random_test`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomLookup {
    pub character: &'static str,
    pub meaning: String,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Orchestrates cache check, provider call and cache write.
///
/// Cheap to clone; both collaborators are shared behind `Arc`.
#[derive(Clone)]
pub struct LookupService {
    store: Arc<dyn KanjiStore>,
    provider: Arc<dyn MeaningProvider>,
}

impl LookupService {
    pub fn new(store: Arc<dyn KanjiStore>, provider: Arc<dyn MeaningProvider>) -> Self {
        Self { store, provider }
    }

    /// Resolve the meaning of `character` for `user_id`.
    ///
    /// Invalid input is rejected before any I/O. A cache hit never calls the
    /// provider. On a miss the provider is called at most once and a
    /// successful answer is written before returning.
    pub async fn resolve(
        &self,
        user_id: DbId,
        username: &str,
        character: &str,
    ) -> Result<LookupResult, CoreError> {
        validate_kanji(character)?;

        if let Some(entry) = self
            .store
            .find_by_user_and_character(user_id, character)
            .await?
        {
            tracing::info!(user_id, character, kanji_id = entry.kanji_id, "Cache hit");
            return Ok(LookupResult::from_entry(entry, LookupSource::Cache));
        }

        tracing::info!(user_id, character, "Cache miss, querying provider");
        let meaning = self
            .provider
            .fetch_meaning(character)
            .await
            .ok_or_else(|| CoreError::LookupNotFound {
                character: character.to_string(),
            })?;

        let kanji_id = self.store.max_sequence_id(user_id).await? + 1;
        let new_entry = NewKanjiEntry {
            user_id,
            username: username.to_string(),
            kanji_id,
            character: character.to_string(),
            meaning,
        };

        match self.store.insert(&new_entry).await? {
            InsertOutcome::Inserted(entry) => {
                tracing::info!(user_id, character, kanji_id = entry.kanji_id, "Saved kanji");
                Ok(LookupResult::from_entry(entry, LookupSource::Api))
            }
            InsertOutcome::AlreadyPresent(entry) => {
                tracing::debug!(
                    user_id,
                    character,
                    kanji_id = entry.kanji_id,
                    "Concurrent lookup stored this kanji first",
                );
                Ok(LookupResult::from_entry(entry, LookupSource::Cache))
            }
        }
    }

    /// All cached entries for `user_id`, ordered by `kanji_id`.
    pub async fn list_for_user(&self, user_id: DbId) -> Result<Vec<KanjiEntry>, CoreError> {
        Ok(self.store.list_by_user(user_id).await?)
    }

    /// Whether the cache store answers its liveness probe.
    pub async fn store_healthy(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Store health check failed");
                false
            }
        }
    }

    /// Look up one of the fixed test kanji without touching the store.
    pub async fn random_test(&self) -> RandomLookup {
        let character = pick_random_test_kanji(&mut rand::rng());
        let meaning = self
            .provider
            .fetch_meaning(character)
            .await
            .unwrap_or_else(|| UNKNOWN_MEANING.to_string());
        RandomLookup { character, meaning }
    }
}

/// Choose one of [`RANDOM_TEST_KANJI`] uniformly.
pub fn pick_random_test_kanji<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    RANDOM_TEST_KANJI
        .choose(rng)
        .copied()
        .unwrap_or(RANDOM_TEST_KANJI[0])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
