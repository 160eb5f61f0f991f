//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests call `IntoResponse` directly on `AppError` values; no HTTP
//! server is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use kanjigo_api::error::AppError;
use kanjigo_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("bad kanji".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "bad kanji");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn lookup_not_found_returns_404() {
    let err = AppError::Core(CoreError::LookupNotFound {
        character: "龍".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "LOOKUP_NOT_FOUND");
}

#[tokio::test]
async fn bad_request_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn store_unavailable_returns_500_with_raw_details() {
    let err = AppError::Core(CoreError::StoreUnavailable(
        "connection refused (os error 111)".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
    assert_eq!(json["error"], "A server error occurred");
    assert_eq!(json["details"], "connection refused (os error 111)");
}

#[tokio::test]
async fn provider_unavailable_returns_500_with_raw_details() {
    let err = AppError::Core(CoreError::ProviderUnavailable(
        "Kanji Alive API error (403): missing key".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "PROVIDER_UNAVAILABLE");
    assert_eq!(json["error"], "A server error occurred");
    assert_eq!(json["details"], "Kanji Alive API error (403): missing key");
}
