//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod kanji_info_repo;

pub use kanji_info_repo::KanjiInfoRepo;
