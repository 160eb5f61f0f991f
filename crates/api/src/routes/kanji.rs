//! Route definitions for kanji lookups, mounted at `/kanji`.

use axum::routing::get;
use axum::Router;

use crate::handlers::kanji;
use crate::state::AppState;

/// ```text
/// GET /{character}           -> lookup_kanji
/// GET /{character}/details   -> kanji_details
/// GET /random/test           -> random_test
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/random/test", get(kanji::random_test))
        .route("/{character}", get(kanji::lookup_kanji))
        .route("/{character}/details", get(kanji::kanji_details))
}
