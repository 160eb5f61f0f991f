use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `OK` when the store answers, `DEGRADED` otherwise.
    pub status: &'static str,
    pub message: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the cache store is reachable.
    pub db_healthy: bool,
}

/// GET /api/health -- returns service and store health.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = state.lookup.store_healthy().await;

    let status = if db_healthy { "OK" } else { "DEGRADED" };

    Json(HealthResponse {
        status,
        message: "Kanji Go API Server is running",
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}
