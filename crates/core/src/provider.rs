//! External dictionary provider seam.
//!
//! The lookup service only needs an English gloss for one character.
//! Implementations swallow their own failures and report `None`, so
//! "provider errored" and "provider had no answer" look the same upstream.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::details::{KanjiDetails, KanjiDetailsProvider, ProviderError};

/// Source of kanji meanings.
#[async_trait]
pub trait MeaningProvider: Send + Sync {
    /// English meaning for `character`, or `None` on error, timeout, or an
    /// empty answer.
    async fn fetch_meaning(&self, character: &str) -> Option<String>;
}

/// Normalise a raw provider meaning: trims whitespace, empty becomes `None`.
pub fn usable_meaning(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Fixed provider
// ---------------------------------------------------------------------------

/// A provider answering from a fixed table and counting calls.
///
/// Serves both meanings and minimal details. [`set_available`](Self::set_available)
/// simulates an outage.
#[derive(Debug)]
pub struct FixedMeaningProvider {
    meanings: HashMap<String, String>,
    calls: AtomicUsize,
    available: AtomicBool,
}

impl FixedMeaningProvider {
    pub fn new() -> Self {
        Self {
            meanings: HashMap::new(),
            calls: AtomicUsize::new(0),
            available: AtomicBool::new(true),
        }
    }

    /// Builder-style helper adding one `character -> meaning` pair.
    pub fn with_meaning(mut self, character: &str, meaning: &str) -> Self {
        self.meanings
            .insert(character.to_string(), meaning.to_string());
        self
    }

    /// Toggle whether calls succeed. While unavailable, meanings are `None`
    /// and details fail with [`ProviderError`].
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of provider calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lookup(&self, character: &str) -> Result<Option<String>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.available.load(Ordering::SeqCst) {
            return Err(ProviderError("fixed provider is unavailable".to_string()));
        }
        Ok(usable_meaning(self.meanings.get(character).map(String::as_str)))
    }
}

impl Default for FixedMeaningProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MeaningProvider for FixedMeaningProvider {
    async fn fetch_meaning(&self, character: &str) -> Option<String> {
        self.lookup(character).ok().flatten()
    }
}

#[async_trait]
impl KanjiDetailsProvider for FixedMeaningProvider {
    async fn fetch_details(&self, character: &str) -> Result<Option<KanjiDetails>, ProviderError> {
        Ok(self
            .lookup(character)?
            .map(|meaning| KanjiDetails::new(character, Some(meaning))))
    }
}
