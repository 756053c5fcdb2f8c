//! Query normalisation.
//!
//! Trims the raw query, collapses internal whitespace runs to a single space
//! and rejects anything shorter than the configured minimum.

use std::fmt;

/// A query that has been normalised and passed the minimum-length check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    /// Normalise `raw` and accept it if it is at least `min_len` characters.
    ///
    /// Returns `None` for a missing, blank or too-short query. A rejected
    /// query is not an error; the caller simply has nothing to search for.
    pub fn parse(raw: Option<&str>, min_len: usize) -> Option<Self> {
        let normalized = normalize(raw?);
        if normalized.chars().count() < min_len {
            return None;
        }
        Some(Self(normalized))
    }

    /// The normalised text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim `raw` and collapse every internal whitespace run to one space.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
