//! Route definitions for per-user kanji, mounted at `/user`.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// ```text
/// GET /{user_id}/kanji -> list_user_kanji
/// GET /{user_id}/quiz  -> meaning_quiz
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}/kanji", get(user::list_user_kanji))
        .route("/{user_id}/quiz", get(user::meaning_quiz))
}
