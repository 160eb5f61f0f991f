//! Handlers for a user's learned kanji.
//!
//! Lists the personal cache and builds meaning quizzes from it.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use kanjigo_core::quiz::{generate_meaning_quiz, MeaningQuiz};
use kanjigo_core::store::KanjiEntry;
use kanjigo_core::types::DbId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// One row of a user's kanji list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserKanjiItem {
    pub kanji_id: i64,
    pub character: String,
    pub meaning: String,
}

impl From<KanjiEntry> for UserKanjiItem {
    fn from(entry: KanjiEntry) -> Self {
        Self {
            kanji_id: entry.kanji_id,
            character: entry.character,
            meaning: entry.meaning,
        }
    }
}

/// Response body for `GET /api/user/{user_id}/kanji`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserKanjiResponse {
    pub user_id: DbId,
    pub kanji_count: usize,
    pub kanji: Vec<UserKanjiItem>,
}

fn user_id_from(path: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    path.map(|Path(id)| id)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// GET /api/user/{user_id}/kanji
///
/// List every kanji the user has looked up, ordered by `kanjiId`.
pub async fn list_user_kanji(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<UserKanjiResponse>> {
    let user_id = user_id_from(path)?;
    let entries = state.lookup.list_for_user(user_id).await?;

    let kanji: Vec<UserKanjiItem> = entries.into_iter().map(UserKanjiItem::from).collect();

    Ok(Json(UserKanjiResponse {
        user_id,
        kanji_count: kanji.len(),
        kanji,
    }))
}

/// GET /api/user/{user_id}/quiz
///
/// Build a "which kanji means X?" question from the user's own list.
pub async fn meaning_quiz(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<MeaningQuiz>> {
    let user_id = user_id_from(path)?;
    let entries = state.lookup.list_for_user(user_id).await?;

    let quiz = generate_meaning_quiz(&entries, &mut rand::rng())?;

    tracing::debug!(user_id, answer = %quiz.answer, "Generated meaning quiz");

    Ok(Json(quiz))
}
