//! Integration tests for the `kanji_info` repository and `PgKanjiStore`.
//!
//! Exercises the cache table against a real database:
//! - Empty-user sequence defaults
//! - Insert / find round trip
//! - Unique `(user_id, kanji_character)` enforcement
//! - Listing order
//! - Full lookups through `LookupService`

use std::sync::Arc;

use assert_matches::assert_matches;
use kanjigo_core::lookup::{LookupService, LookupSource};
use kanjigo_core::provider::FixedMeaningProvider;
use kanjigo_core::store::{InsertOutcome, KanjiStore, NewKanjiEntry};
use kanjigo_db::repositories::KanjiInfoRepo;
use kanjigo_db::store::PgKanjiStore;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_entry(user_id: i64, kanji_id: i64, character: &str, meaning: &str) -> NewKanjiEntry {
    NewKanjiEntry {
        user_id,
        username: "testuser".to_string(),
        kanji_id,
        character: character.to_string(),
        meaning: meaning.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn bootstrap_health_check(pool: PgPool) {
    kanjigo_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn max_kanji_id_is_zero_without_rows(pool: PgPool) {
    assert_eq!(KanjiInfoRepo::max_kanji_id(&pool, 1).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn insert_and_find(pool: PgPool) {
    let row = KanjiInfoRepo::insert(&pool, 1, "testuser", 1, "学", "study")
        .await
        .unwrap()
        .expect("row inserted");
    assert_eq!(row.kanji_id, 1);
    assert_eq!(row.kanji_character, "学");

    let found = KanjiInfoRepo::find_by_user_and_character(&pool, 1, "学")
        .await
        .unwrap()
        .expect("row found");
    assert_eq!(found.meaning, "study");

    let other_user = KanjiInfoRepo::find_by_user_and_character(&pool, 2, "学")
        .await
        .unwrap();
    assert!(other_user.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_pair_is_suppressed(pool: PgPool) {
    KanjiInfoRepo::insert(&pool, 1, "testuser", 1, "学", "study")
        .await
        .unwrap();
    let second = KanjiInfoRepo::insert(&pool, 1, "testuser", 2, "学", "learning")
        .await
        .unwrap();
    assert!(second.is_none());

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM kanji_info WHERE user_id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn multi_character_value_violates_check(pool: PgPool) {
    let result = KanjiInfoRepo::insert(&pool, 1, "testuser", 1, "学校", "school").await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_user_is_ordered(pool: PgPool) {
    KanjiInfoRepo::insert(&pool, 1, "u", 3, "人", "person").await.unwrap();
    KanjiInfoRepo::insert(&pool, 1, "u", 1, "学", "study").await.unwrap();
    KanjiInfoRepo::insert(&pool, 1, "u", 2, "本", "book").await.unwrap();
    KanjiInfoRepo::insert(&pool, 2, "v", 1, "日", "day").await.unwrap();

    let rows = KanjiInfoRepo::list_by_user(&pool, 1).await.unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.kanji_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(KanjiInfoRepo::max_kanji_id(&pool, 1).await.unwrap(), 3);
}

// ---------------------------------------------------------------------------
// PgKanjiStore
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn store_reports_already_present(pool: PgPool) {
    let store = PgKanjiStore::new(pool);

    let first = store.insert(&new_entry(1, 1, "学", "study")).await.unwrap();
    assert_matches!(first, InsertOutcome::Inserted(ref e) if e.kanji_id == 1);

    let second = store.insert(&new_entry(1, 2, "学", "other")).await.unwrap();
    assert_matches!(
        second,
        InsertOutcome::AlreadyPresent(ref e) if e.kanji_id == 1 && e.meaning == "study"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_inserts_leave_one_row(pool: PgPool) {
    let store = PgKanjiStore::new(pool.clone());
    let a = new_entry(1, 1, "学", "study");
    let b = new_entry(1, 1, "学", "study");

    let (ra, rb) = futures::future::join(store.insert(&a), store.insert(&b)).await;
    let outcomes = [ra.unwrap(), rb.unwrap()];

    let inserted = outcomes
        .iter()
        .filter(|o| matches!(o, InsertOutcome::Inserted(_)))
        .count();
    assert_eq!(inserted, 1);
    assert_eq!(store.list_by_user(1).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Lookup service over Postgres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_miss_then_hit(pool: PgPool) {
    let store = Arc::new(PgKanjiStore::new(pool));
    let provider = Arc::new(FixedMeaningProvider::new().with_meaning("学", "study"));
    let service = LookupService::new(store.clone(), provider.clone());

    let first = service.resolve(1, "t", "学").await.unwrap();
    assert_eq!(first.source, LookupSource::Api);
    assert_eq!(first.kanji_id, 1);

    let second = service.resolve(1, "t", "学").await.unwrap();
    assert_eq!(second.source, LookupSource::Cache);
    assert_eq!(second.meaning, "study");
    assert_eq!(provider.calls(), 1);
}
