//! Type coercion for HTML form fields, where "nothing entered" arrives as an empty string.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

/// Deserialize an optional field, treating an empty (or all-blank) value as absent.
/// Use with `#[serde(default, deserialize_with = "crate::utils::form::empty_string_as_none")]`.
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}
