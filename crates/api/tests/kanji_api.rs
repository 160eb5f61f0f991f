//! Integration tests for the kanji lookup endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, build_test_app, encode_segment, get, kanji_uri, test_provider};
use kanjigo_core::kanji::RANDOM_TEST_KANJI;
use kanjigo_core::provider::FixedMeaningProvider;
use kanjigo_core::store::{KanjiStore, MemoryKanjiStore};

// ---------------------------------------------------------------------------
// Test: first lookup comes from the provider, second from the cache
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lookup_miss_then_hit() {
    let store = Arc::new(MemoryKanjiStore::new());
    let provider = test_provider();

    let app = build_test_app(store.clone(), provider.clone());
    let response = get(app, &kanji_uri("学", "userId=1&username=t")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({
            "character": "学",
            "meaning": "study",
            "source": "api",
            "cached": false,
            "kanjiId": 1
        })
    );

    let app = build_test_app(store.clone(), provider.clone());
    let response = get(app, &kanji_uri("学", "userId=1&username=t")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({
            "character": "学",
            "meaning": "study",
            "source": "cache",
            "cached": true,
            "kanjiId": 1
        })
    );

    assert_eq!(provider.calls(), 1);
    assert_eq!(store.len().await, 1);
}

// ---------------------------------------------------------------------------
// Test: sequence ids grow per user
// ---------------------------------------------------------------------------

#[tokio::test]
async fn kanji_ids_increment_per_user() {
    let store = Arc::new(MemoryKanjiStore::new());
    let provider = test_provider();

    for (i, k) in ["本", "学", "人"].iter().enumerate() {
        let app = build_test_app(store.clone(), provider.clone());
        let json = body_json(get(app, &kanji_uri(k, "userId=3")).await).await;
        assert_eq!(json["kanjiId"], i as i64 + 1);
    }

    let app = build_test_app(store, provider);
    let json = body_json(get(app, &kanji_uri("本", "userId=4")).await).await;
    assert_eq!(json["kanjiId"], 1);
}

// ---------------------------------------------------------------------------
// Test: missing query parameters fall back to the default user
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_user_defaults_to_user_one() {
    let store = Arc::new(MemoryKanjiStore::new());
    let provider = test_provider();

    let app = build_test_app(store.clone(), provider.clone());
    let response = get(app, &kanji_uri("日", "")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = build_test_app(store, provider);
    let json = body_json(get(app, "/api/user/1/kanji").await).await;
    assert_eq!(json["kanjiCount"], 1);
    assert_eq!(json["kanji"][0]["character"], "日");
}

// ---------------------------------------------------------------------------
// Test: empty query values fall back to the default user
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_user_params_default_to_user_one() {
    let store = Arc::new(MemoryKanjiStore::new());
    let provider = test_provider();

    let app = build_test_app(store.clone(), provider.clone());
    let response = get(app, &kanji_uri("学", "userId=&username=")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["kanjiId"], 1);

    let rows = store.list_by_user(1).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username, "testuser");
}

// ---------------------------------------------------------------------------
// Test: invalid characters are rejected with 400 and no I/O
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_characters_return_400() {
    let store = Arc::new(MemoryKanjiStore::new());
    let provider = test_provider();

    for bad in ["AB", "1", "a", "あ", "学校"] {
        let app = build_test_app(store.clone(), provider.clone());
        let response = get(app, &kanji_uri(bad, "userId=1")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "input {bad:?}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"], "Please enter a single kanji character");
    }

    assert_eq!(provider.calls(), 0);
    assert!(store.is_empty().await);
}

// ---------------------------------------------------------------------------
// Test: provider without a meaning returns 404 and persists nothing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_kanji_returns_404() {
    let store = Arc::new(MemoryKanjiStore::new());
    let provider = Arc::new(FixedMeaningProvider::new());

    let app = build_test_app(store.clone(), provider.clone());
    let response = get(app, &kanji_uri("龍", "userId=1")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "LOOKUP_NOT_FOUND");
    assert!(json["error"].is_string());
    assert!(json.get("details").is_none());

    assert_eq!(provider.calls(), 1);
    assert!(store.is_empty().await);
}

// ---------------------------------------------------------------------------
// Test: store outage returns 500 with raw details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_outage_returns_500_with_details() {
    let store = Arc::new(MemoryKanjiStore::new());
    store.set_available(false);
    let provider = test_provider();

    let app = build_test_app(store, provider.clone());
    let response = get(app, &kanji_uri("学", "userId=1")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
    assert_eq!(json["details"], "memory store is unavailable");
    assert_eq!(provider.calls(), 0);
}

// ---------------------------------------------------------------------------
// Test: malformed userId returns a JSON 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_user_id_returns_400() {
    let app = build_test_app(Arc::new(MemoryKanjiStore::new()), test_provider());
    let response = get(app, &kanji_uri("学", "userId=abc")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Test: random test lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn random_test_returns_a_test_kanji() {
    let store = Arc::new(MemoryKanjiStore::new());
    let app = build_test_app(store.clone(), test_provider());

    let response = get(app, "/api/kanji/random/test").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["source"], "random_test");
    let character = json["character"].as_str().unwrap();
    assert!(RANDOM_TEST_KANJI.contains(&character));
    assert!(json["meaning"].is_string());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn random_test_reports_unknown_without_provider_answer() {
    let app = build_test_app(
        Arc::new(MemoryKanjiStore::new()),
        Arc::new(FixedMeaningProvider::new()),
    );

    let json = body_json(get(app, "/api/kanji/random/test").await).await;
    assert_eq!(json["meaning"], "Unknown");
}

// ---------------------------------------------------------------------------
// Test: kanji details
// ---------------------------------------------------------------------------

fn details_uri(character: &str) -> String {
    format!("/api/kanji/{}/details", encode_segment(character))
}

#[tokio::test]
async fn details_for_known_kanji() {
    let store = Arc::new(MemoryKanjiStore::new());
    let app = build_test_app(store.clone(), test_provider());

    let response = get(app, &details_uri("学")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["character"], "学");
    assert_eq!(json["meaning"], "study");
    assert_eq!(json["words"], serde_json::json!([]));
    assert!(json["strokeOrder"].is_object());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn details_reject_invalid_characters() {
    let provider = test_provider();
    let app = build_test_app(Arc::new(MemoryKanjiStore::new()), provider.clone());

    let response = get(app, &details_uri("AB")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn details_for_unknown_kanji_return_404() {
    let app = build_test_app(Arc::new(MemoryKanjiStore::new()), test_provider());

    let response = get(app, &details_uri("龍")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "LOOKUP_NOT_FOUND");
}

#[tokio::test]
async fn details_with_provider_outage_return_500() {
    let provider = test_provider();
    provider.set_available(false);
    let app = build_test_app(Arc::new(MemoryKanjiStore::new()), provider);

    let response = get(app, &details_uri("学")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PROVIDER_UNAVAILABLE");
    assert_eq!(json["details"], "fixed provider is unavailable");
}
