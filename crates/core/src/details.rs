//! Full kanji detail lookup.
//!
//! Unlike [`crate::lookup`], details are never cached: every request goes to
//! the provider, and provider failures surface to the caller instead of being
//! folded into "not found".

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CoreError;
use crate::kanji::validate_kanji;

// ---------------------------------------------------------------------------
// Domain types
// ---------------------------------------------------------------------------

/// A kanji reading in romaji and kana.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub romaji: Option<String>,
    pub kana: Option<String>,
}

/// The radical a kanji is indexed under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Radical {
    pub character: Option<String>,
    pub strokes: Option<u32>,
    pub meaning: Option<String>,
}

/// Stroke-order media.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeOrder {
    pub image: Option<String>,
    pub video_mp4: Option<String>,
    pub video_webm: Option<String>,
}

/// An example word containing the kanji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleWord {
    pub word: String,
    pub reading: String,
    pub meaning: String,
}

/// Everything the provider knows about one kanji.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanjiDetails {
    pub character: String,
    pub meaning: Option<String>,
    pub strokes: Option<u32>,
    pub onyomi: Reading,
    pub kunyomi: Reading,
    pub radical: Option<Radical>,
    pub stroke_order: StrokeOrder,
    pub words: Vec<ExampleWord>,
}

impl KanjiDetails {
    /// Details carrying only a character and its meaning.
    pub fn new(character: &str, meaning: Option<String>) -> Self {
        Self {
            character: character.to_string(),
            meaning,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Provider seam
// ---------------------------------------------------------------------------

/// Failure talking to the detail provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

impl From<ProviderError> for CoreError {
    fn from(err: ProviderError) -> Self {
        CoreError::ProviderUnavailable(err.0)
    }
}

/// Source of full kanji details.
#[async_trait]
pub trait KanjiDetailsProvider: Send + Sync {
    /// `Ok(None)` when the provider does not know the character.
    async fn fetch_details(&self, character: &str) -> Result<Option<KanjiDetails>, ProviderError>;
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct DetailsService {
    provider: Arc<dyn KanjiDetailsProvider>,
}

impl DetailsService {
    pub fn new(provider: Arc<dyn KanjiDetailsProvider>) -> Self {
        Self { provider }
    }

    /// Validate `character` and fetch its details from the provider.
    pub async fn details(&self, character: &str) -> Result<KanjiDetails, CoreError> {
        validate_kanji(character)?;

        match self.provider.fetch_details(character).await {
            Ok(Some(details)) => {
                tracing::debug!(character, words = details.words.len(), "Fetched kanji details");
                Ok(details)
            }
            Ok(None) => Err(CoreError::LookupNotFound {
                character: character.to_string(),
            }),
            Err(e) => {
                tracing::warn!(character, error = %e, "Detail provider failed");
                Err(e.into())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
