//! Client for the Kanji Alive dictionary API (served through RapidAPI).
//!
//! [`KanjiAliveClient`] fetches a kanji's detail document. It serves as the
//! [`MeaningProvider`](kanjigo_core::provider::MeaningProvider) for cached
//! lookups and as the
//! [`KanjiDetailsProvider`](kanjigo_core::details::KanjiDetailsProvider) for
//! the detail endpoint.

pub mod client;
pub mod config;
pub mod types;

pub use client::{KanjiAliveClient, KanjiAliveError};
pub use config::KanjiAliveConfig;
