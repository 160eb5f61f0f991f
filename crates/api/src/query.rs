//! Shared query parameter types for API handlers.

use std::fmt;
use std::str::FromStr;

use kanjigo_core::types::DbId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Query parameters for `GET /api/kanji/{character}` (`?userId=&username=`).
///
/// Empty values are treated the same as missing ones.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub user_id: Option<DbId>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub username: Option<String>,
}

/// Deserialize an optional query value, mapping blank strings to `None`.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(D::Error::custom),
    }
}
