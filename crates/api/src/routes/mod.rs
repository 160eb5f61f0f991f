pub mod health;
pub mod kanji;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                      service and store health
///
/// /kanji/{character}           read-through lookup (?userId=&username=)
/// /kanji/{character}/details   full provider details, uncached
/// /kanji/random/test           provider-only lookup of a common kanji
///
/// /user/{user_id}/kanji        the user's learned kanji
/// /user/{user_id}/quiz         meaning quiz from the user's kanji
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/kanji", kanji::router())
        .nest("/user", user::router())
}
