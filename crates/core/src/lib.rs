//! Domain logic for the Kanji Go backend.
//!
//! Everything here is free of network and database dependencies: the
//! lookup service talks to its collaborators through the [`store::KanjiStore`]
//! and [`provider::MeaningProvider`] traits, and the detail lookup through
//! [`details::KanjiDetailsProvider`].

pub mod details;
pub mod error;
pub mod kanji;
pub mod lookup;
pub mod provider;
pub mod quiz;
pub mod store;
pub mod types;
