//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] names every value the pipeline would otherwise hard-code:
//! the three catalog endpoints, the result cap, the per-request timeout, the
//! minimum query length and the fallback icon.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Hard upper bound on the number of results a single search returns.
pub const MAX_RESULTS: usize = 5;

/// Queries shorter than this (after normalisation) are rejected.
pub const MIN_QUERY_LEN: usize = 3;

/// Artist search endpoint. The query is sent as `q=artist:<query>`.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "http://ws.spotify.com/search/1/artist.json";

/// Artist lookup endpoint. Sent as `uri=<artist uri>&extras=album`.
pub const DEFAULT_LOOKUP_ENDPOINT: &str = "http://ws.spotify.com/lookup/1/.json";

/// Thumbnail embed endpoint. Sent as `url=<artist uri>`.
pub const DEFAULT_EMBED_ENDPOINT: &str = "https://embed.spotify.com/oembed/";

/// Icon used when the thumbnail cannot be resolved.
pub const DEFAULT_FALLBACK_ICON: &str =
    "/usr/share/icons/unity-icon-theme/places/svg/service-spotify.svg";

/// Configuration for an artist search.
///
/// Use [`Default::default()`] for the stock catalog endpoints, or construct
/// with field overrides (tests point the endpoints at a mock server).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Artist search endpoint.
    pub search_endpoint: String,
    /// Artist lookup endpoint, used to count albums.
    pub lookup_endpoint: String,
    /// Thumbnail embed endpoint.
    pub embed_endpoint: String,
    /// Maximum number of results returned. Must be within `1..=MAX_RESULTS`.
    pub max_results: usize,
    /// Minimum normalised query length, in characters.
    pub min_query_len: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Icon path used when thumbnail resolution fails.
    pub fallback_icon: String,
    /// Custom User-Agent string. If `None`, `spotify-scope/<version>` is sent.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_owned(),
            lookup_endpoint: DEFAULT_LOOKUP_ENDPOINT.to_owned(),
            embed_endpoint: DEFAULT_EMBED_ENDPOINT.to_owned(),
            max_results: MAX_RESULTS,
            min_query_len: MIN_QUERY_LEN,
            timeout_seconds: 8,
            fallback_icon: DEFAULT_FALLBACK_ICON.to_owned(),
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Point all three endpoints at `base`, keeping the stock paths.
    ///
    /// Mostly useful for tests against a local mock server.
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.search_endpoint = format!("{base}/search/1/artist.json");
        self.lookup_endpoint = format!("{base}/lookup/1/.json");
        self.embed_endpoint = format!("{base}/oembed/");
        self
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results` must be within `1..=MAX_RESULTS`
    /// - `min_query_len` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - every endpoint must parse as an absolute URL
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.max_results > MAX_RESULTS {
            return Err(SearchError::Config(format!(
                "max_results must be at most {MAX_RESULTS}"
            )));
        }
        if self.min_query_len == 0 {
            return Err(SearchError::Config(
                "min_query_len must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        for (name, endpoint) in [
            ("search_endpoint", &self.search_endpoint),
            ("lookup_endpoint", &self.lookup_endpoint),
            ("embed_endpoint", &self.embed_endpoint),
        ] {
            url::Url::parse(endpoint)
                .map_err(|e| SearchError::Config(format!("{name} is not a valid URL: {e}")))?;
        }
        Ok(())
    }
}
