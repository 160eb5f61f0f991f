//! HTTP client for the Kanji Alive detail endpoint.

use async_trait::async_trait;
use kanjigo_core::details::{KanjiDetails, KanjiDetailsProvider, ProviderError};
use kanjigo_core::provider::{usable_meaning, MeaningProvider};

use crate::config::KanjiAliveConfig;
use crate::types::KanjiAliveResponse;

/// Errors from the Kanji Alive API layer.
#[derive(Debug, thiserror::Error)]
pub enum KanjiAliveError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Kanji Alive returned a non-2xx status code.
    #[error("Kanji Alive API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Client for the Kanji Alive API.
#[derive(Debug, Clone)]
pub struct KanjiAliveClient {
    client: reqwest::Client,
    config: KanjiAliveConfig,
}

impl KanjiAliveClient {
    /// Build a client whose requests are bounded by `config.timeout`.
    pub fn new(config: KanjiAliveConfig) -> Result<Self, KanjiAliveError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Fetch the detail document for one kanji.
    ///
    /// Sends `GET {base_url}/api/public/kanji/{character}` with the RapidAPI
    /// key and host headers.
    pub async fn fetch_kanji(&self, character: &str) -> Result<KanjiAliveResponse, KanjiAliveError> {
        let url = format!("{}/api/public/kanji/{character}", self.config.base_url);
        tracing::debug!(character, %url, "Fetching from Kanji Alive");

        let response = self
            .client
            .get(url)
            .header("x-rapidapi-key", &self.config.api_key)
            .header("x-rapidapi-host", &self.config.api_host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KanjiAliveError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<KanjiAliveResponse>().await?)
    }
}

#[async_trait]
impl MeaningProvider for KanjiAliveClient {
    async fn fetch_meaning(&self, character: &str) -> Option<String> {
        match self.fetch_kanji(character).await {
            Ok(response) => {
                let meaning = usable_meaning(response.english_meaning());
                if meaning.is_none() {
                    tracing::warn!(character, "Kanji Alive returned no English meaning");
                }
                meaning
            }
            Err(e) => {
                tracing::warn!(character, error = %e, "Kanji Alive lookup failed");
                None
            }
        }
    }
}

#[async_trait]
impl KanjiDetailsProvider for KanjiAliveClient {
    async fn fetch_details(&self, character: &str) -> Result<Option<KanjiDetails>, ProviderError> {
        match self.fetch_kanji(character).await {
            Ok(response) => Ok(response.into_details(character)),
            Err(KanjiAliveError::ApiError { status: 404, .. }) => Ok(None),
            Err(e) => Err(ProviderError(e.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
