//! Handlers for kanji lookups.
//!
//! `GET /api/kanji/{character}` is the read-through cache endpoint;
//! `GET /api/kanji/{character}/details` proxies the full provider document;
//! `GET /api/kanji/random/test` exercises the provider without the store.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use kanjigo_core::details::KanjiDetails;
use kanjigo_core::lookup::LookupResult;
use kanjigo_core::types::DbId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::LookupParams;
use crate::state::AppState;

/// User id assumed when the client omits `userId`.
pub const DEFAULT_USER_ID: DbId = 1;

/// Username assumed when the client omits `username`.
pub const DEFAULT_USERNAME: &str = "testuser";

/// Response body for a successful lookup.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub character: String,
    pub meaning: String,
    pub source: &'static str,
    pub cached: bool,
    pub kanji_id: i64,
}

impl From<LookupResult> for LookupResponse {
    fn from(result: LookupResult) -> Self {
        Self {
            cached: result.cached(),
            source: result.source.as_str(),
            character: result.character,
            meaning: result.meaning,
            kanji_id: result.kanji_id,
        }
    }
}

/// Response body for the random test lookup.
#[derive(Debug, Serialize)]
pub struct RandomTestResponse {
    pub character: &'static str,
    pub meaning: String,
    pub source: &'static str,
}

/// GET /api/kanji/{character}?userId=&username=
///
/// Serve the meaning from the user's cache, or fetch, store and return it.
pub async fn lookup_kanji(
    State(state): State<AppState>,
    Path(character): Path<String>,
    params: Result<Query<LookupParams>, QueryRejection>,
) -> AppResult<Json<LookupResponse>> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let user_id = params.user_id.unwrap_or(DEFAULT_USER_ID);
    let username = params
        .username
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string());

    let result = state.lookup.resolve(user_id, &username, &character).await?;

    Ok(Json(result.into()))
}

/// GET /api/kanji/{character}/details
///
/// Readings, radical, stroke order and example words. Not cached.
pub async fn kanji_details(
    State(state): State<AppState>,
    Path(character): Path<String>,
) -> AppResult<Json<KanjiDetails>> {
    let details = state.details.details(&character).await?;
    Ok(Json(details))
}

/// GET /api/kanji/random/test
///
/// Look up one of a fixed set of common kanji. Never touches the store.
pub async fn random_test(State(state): State<AppState>) -> Json<RandomTestResponse> {
    let result = state.lookup.random_test().await;

    Json(RandomTestResponse {
        character: result.character,
        meaning: result.meaning,
        source: "random_test",
    })
}
