//! Kanji input validation.
//!
//! A lookup key is exactly one CJK ideograph. Everything else (kana, Latin
//! letters, digits, multi-character strings) is rejected before any I/O.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Pattern matching a single CJK ideograph.
///
/// Covers the unified block, extension A, the compatibility block and
/// extension B.
pub const KANJI_PATTERN: &str =
    r"^[\x{4E00}-\x{9FFF}\x{3400}-\x{4DBF}\x{F900}-\x{FAFF}\x{20000}-\x{2A6DF}]$";

/// Compiled regex for [`KANJI_PATTERN`].
static KANJI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(KANJI_PATTERN).expect("valid regex"));

/// Message returned to clients when the character fails validation.
pub const INVALID_KANJI_MESSAGE: &str = "Please enter a single kanji character";

/// Characters served by the random test lookup.
pub const RANDOM_TEST_KANJI: [&str; 10] = ["学", "本", "人", "日", "大", "小", "中", "高", "新", "今"];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Returns `true` if `input` is exactly one kanji.
pub fn is_single_kanji(input: &str) -> bool {
    KANJI_RE.is_match(input)
}

/// Validate a lookup key, returning the single character on success.
pub fn validate_kanji(input: &str) -> Result<char, CoreError> {
    if !is_single_kanji(input) {
        return Err(CoreError::Validation(INVALID_KANJI_MESSAGE.to_string()));
    }
    input
        .chars()
        .next()
        .ok_or_else(|| CoreError::Validation(INVALID_KANJI_MESSAGE.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
