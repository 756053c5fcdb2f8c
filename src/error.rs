//! Error types for the scope boundary.

use artist_search::SearchError;

/// Top-level error type for the scope.
#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    /// Configuration file could not be parsed or serialized.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The search pipeline rejected its configuration.
    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ScopeError>;
