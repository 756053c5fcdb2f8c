//! # artist-search
//!
//! Turns a free-text query into a short, ranked list of artist records from
//! the Spotify metadata catalog.
//!
//! ## Design
//!
//! - Normalises the query and rejects anything shorter than three characters
//! - One artist search request, truncated to at most [`MAX_RESULTS`] entries
//! - Per-entry enrichment: a larger thumbnail and the artist's album count
//! - Provider order is the ranking; nothing is re-sorted
//! - Cooperative cancellation through a per-invocation [`CancellationToken`]
//! - Graceful degradation: a failed enrichment only blanks that one field
//!
//! ## Privacy
//!
//! - No credentials of any kind
//! - Search queries are logged only at trace level
//! - No cross-call caching; every invocation builds fresh transport state

pub mod assemble;
pub mod catalog;
pub mod config;
pub mod enrich;
pub mod error;
pub mod http;
pub mod normalize;
pub mod pipeline;
pub mod provider;
pub mod types;

pub use catalog::SpotifyCatalog;
pub use config::{SearchConfig, MAX_RESULTS, MIN_QUERY_LEN};
pub use error::{Result, SearchError};
pub use provider::CatalogProvider;
pub use tokio_util::sync::CancellationToken;
pub use types::SearchResult;

/// Search the catalog for artists matching `query`.
///
/// Builds a fresh [`SpotifyCatalog`] for this invocation and runs the
/// pipeline. A missing or too-short query, a failed artist search, or a
/// cancellation before the first entry all yield `Ok` with an empty list.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid, or
/// [`SearchError::Http`] if the HTTP client cannot be built. Network and
/// response-shape failures never surface here.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> artist_search::Result<()> {
/// let token = artist_search::CancellationToken::new();
/// let config = artist_search::SearchConfig::default();
/// let results = artist_search::search(Some("daft punk"), &token, &config).await?;
/// for result in &results {
///     println!("{} ({})", result.title(), result.link());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(
    query: Option<&str>,
    cancel: &CancellationToken,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>> {
    config.validate()?;
    let catalog = SpotifyCatalog::new(config)?;
    Ok(pipeline::run_search(query, cancel, &catalog, config).await)
}

/// Search through a caller-supplied [`CatalogProvider`].
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid.
pub async fn search_with<P: CatalogProvider>(
    provider: &P,
    query: Option<&str>,
    cancel: &CancellationToken,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>> {
    config.validate()?;
    Ok(pipeline::run_search(query, cancel, provider, config).await)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::types::ArtistEntry;

    /// Serves two artists and counts searches.
    #[derive(Default)]
    struct TwoArtists {
        searches: AtomicUsize,
    }

    impl CatalogProvider for TwoArtists {
        async fn search_artists(&self, _query: &str) -> Result<Vec<ArtistEntry>> {
            self.searches.fetch_add(1, Ordering::SeqCst);
            Ok(["Air", "Justice"]
                .into_iter()
                .map(|name| ArtistEntry {
                    name: Some(name.into()),
                    href: Some(format!("spotify:artist:{name}")),
                    popularity: None,
                })
                .collect())
        }

        async fn thumbnail_url(&self, _artist_uri: &str) -> Result<String> {
            Err(SearchError::Http("offline".into()))
        }

        async fn album_count(&self, _artist_uri: &str) -> Result<usize> {
            Ok(2)
        }
    }

    #[tokio::test]
    async fn search_with_uses_supplied_provider() {
        let provider = TwoArtists::default();
        let config = SearchConfig::default();
        let results = search_with(&provider, Some("french house"), &CancellationToken::new(), &config)
            .await
            .expect("valid config");
        assert_eq!(provider.searches.load(Ordering::SeqCst), 1);
        let titles: Vec<_> = results.iter().map(|r| r.title()).collect();
        assert_eq!(titles, vec!["Air", "Justice"]);
        assert_eq!(results[0].icon_url(), config.fallback_icon);
        assert_eq!(results[1].album_count(), Some("2"));
    }

    #[tokio::test]
    async fn search_with_validates_config() {
        let provider = TwoArtists::default();
        let config = SearchConfig {
            max_results: 9,
            ..Default::default()
        };
        let result = search_with(&provider, Some("air"), &CancellationToken::new(), &config).await;
        assert!(result.is_err());
        assert_eq!(provider.searches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn search_validates_config_zero_max_results() {
        let config = SearchConfig {
            max_results: 0,
            ..Default::default()
        };
        let result = search(Some("daft punk"), &CancellationToken::new(), &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_results"));
    }

    #[tokio::test]
    async fn search_validates_config_zero_timeout() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let result = search(Some("daft punk"), &CancellationToken::new(), &config).await;
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn short_query_is_ok_and_empty() {
        let results = search(Some("ab"), &CancellationToken::new(), &SearchConfig::default())
            .await
            .expect("short query is not an error");
        assert!(results.is_empty());
    }
}
