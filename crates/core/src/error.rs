#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The dictionary provider had no meaning for the character, or failed.
    #[error("No meaning found for kanji '{character}'")]
    LookupNotFound { character: String },

    /// The cache store could not be reached or rejected the query.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The dictionary provider could not be reached or answered with an error.
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
