pub mod health;
pub mod kanji;
pub mod user;
