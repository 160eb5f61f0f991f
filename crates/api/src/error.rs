use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kanjigo_core::error::CoreError;
use serde_json::json;

/// Client-facing message when the provider has no meaning.
const NOT_FOUND_MESSAGE: &str = "Could not retrieve the meaning of this kanji";

/// Client-facing message accompanying every 500 response.
const SERVER_ERROR_MESSAGE: &str = "A server error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `kanjigo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::LookupNotFound { .. } => (
                    StatusCode::NOT_FOUND,
                    "LOOKUP_NOT_FOUND",
                    NOT_FOUND_MESSAGE.to_string(),
                    None,
                ),
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                    None,
                ),
                CoreError::StoreUnavailable(msg) => {
                    tracing::error!(error = %msg, "Store unavailable");
                    server_error("STORE_UNAVAILABLE", msg)
                }
                CoreError::ProviderUnavailable(msg) => {
                    tracing::error!(error = %msg, "Provider unavailable");
                    server_error("PROVIDER_UNAVAILABLE", msg)
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    server_error("INTERNAL_ERROR", msg)
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = json!(details);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// 500 tuple carrying the raw underlying message as `details`.
fn server_error(code: &'static str, raw: &str) -> (StatusCode, &'static str, String, Option<String>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        code,
        SERVER_ERROR_MESSAGE.to_string(),
        Some(raw.to_string()),
    )
}
