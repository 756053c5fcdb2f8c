//! Error types for the artist-search crate.
//!
//! Transport and parse errors are absorbed inside the pipeline (an empty
//! result list, or an absent enrichment field). Only configuration errors
//! reach callers of [`crate::search`].

/// Errors that can occur while talking to the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request to the catalog service failed (connect, DNS, status).
    #[error("HTTP error: {0}")]
    Http(String),

    /// A request exceeded the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The response body did not have the expected JSON shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Classify a [`reqwest::Error`], keeping timeouts distinct from other
    /// transport failures.
    pub(crate) fn from_transport(context: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(format!("{context}: {err}"))
        } else {
            Self::Http(format!("{context}: {err}"))
        }
    }
}

/// Convenience type alias for artist-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
