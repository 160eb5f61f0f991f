//! Row models for database tables.

pub mod kanji_info;
