//! Core search pipeline: normalise, search, truncate, enrich, assemble.
//!
//! Runs as one sequential thread of control. Candidates are enriched one at a
//! time in provider order; nothing is re-sorted or de-duplicated.

use tokio_util::sync::CancellationToken;

use crate::assemble::assemble;
use crate::config::SearchConfig;
use crate::enrich::enrich;
use crate::normalize::NormalizedQuery;
use crate::provider::CatalogProvider;
use crate::types::SearchResult;

/// Run one search invocation against `provider`.
///
/// # Pipeline
///
/// 1. Normalise the query; a rejected query returns empty with no requests
/// 2. Fetch the artist list; a transport or parse failure returns empty
/// 3. Walk the first `config.max_results` entries in provider order
/// 4. Poll `cancel` before each entry; once cancelled, return what is built
/// 5. Enrich the entry (album count, then thumbnail) and assemble its record
///
/// Never fails: every error is absorbed at the step that produced it.
pub async fn run_search<P: CatalogProvider>(
    raw_query: Option<&str>,
    cancel: &CancellationToken,
    provider: &P,
    config: &SearchConfig,
) -> Vec<SearchResult> {
    // 1. Normalise.
    let Some(query) = NormalizedQuery::parse(raw_query, config.min_query_len) else {
        tracing::debug!(
            min_len = config.min_query_len,
            "query missing or too short, skipping search"
        );
        return Vec::new();
    };

    tracing::trace!(query = %query, "starting artist search");

    // 2. Primary search.
    let entries = match provider.search_artists(query.as_str()).await {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(error = %err, "artist search failed");
            return Vec::new();
        }
    };

    let total = entries.len();
    let limit = total.min(config.max_results);
    tracing::debug!(total, limit, "artist search returned entries");

    // 3. Per-candidate enrichment, in provider order.
    let mut results = Vec::with_capacity(limit);
    for (index, entry) in entries.into_iter().take(limit).enumerate() {
        // 4. Cooperative cancellation point.
        if cancel.is_cancelled() {
            tracing::info!(
                processed = index,
                returned = results.len(),
                "search cancelled, returning partial results"
            );
            break;
        }

        let Some(candidate) = entry.into_candidate() else {
            tracing::debug!(index, "skipping artist entry without name or href");
            continue;
        };

        // 5. Enrich and assemble.
        let enrichment = enrich(provider, &candidate.href).await;
        tracing::debug!(
            index,
            thumbnail = enrichment.thumbnail_url.is_some(),
            albums = enrichment.album_count.is_some(),
            "candidate enriched"
        );
        results.push(assemble(candidate, enrichment, &config.fallback_icon));
    }

    results
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::SearchError;
    use crate::types::ArtistEntry;

    /// Provider that serves `n` artists and counts every call it receives.
    /// Optionally cancels `token` once `cancel_after` album lookups are done.
    struct CountingProvider {
        artists: usize,
        searches: AtomicUsize,
        lookups: AtomicUsize,
        embeds: AtomicUsize,
        cancel_after: Option<(usize, CancellationToken)>,
    }

    impl CountingProvider {
        fn new(artists: usize) -> Self {
            Self {
                artists,
                searches: AtomicUsize::new(0),
                lookups: AtomicUsize::new(0),
                embeds: AtomicUsize::new(0),
                cancel_after: None,
            }
        }

        fn cancelling(artists: usize, after: usize, token: CancellationToken) -> Self {
            Self {
                cancel_after: Some((after, token)),
                ..Self::new(artists)
            }
        }

        fn total_calls(&self) -> usize {
            self.searches.load(Ordering::SeqCst)
                + self.lookups.load(Ordering::SeqCst)
                + self.embeds.load(Ordering::SeqCst)
        }
    }

    impl CatalogProvider for CountingProvider {
        async fn search_artists(&self, _query: &str) -> Result<Vec<ArtistEntry>, SearchError> {
            self.searches.fetch_add(1, Ordering::SeqCst);
            Ok((0..self.artists)
                .map(|i| ArtistEntry {
                    name: Some(format!("Artist {i}")),
                    href: Some(format!("spotify:artist:{i}")),
                    popularity: Some(serde_json::Value::String(format!("0.{i}"))),
                })
                .collect())
        }

        async fn thumbnail_url(&self, artist_uri: &str) -> Result<String, SearchError> {
            let done = self.embeds.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some((after, token)) = &self.cancel_after {
                if done == *after {
                    token.cancel();
                }
            }
            Ok(format!("http://img/cover/{artist_uri}.jpg"))
        }

        async fn album_count(&self, _artist_uri: &str) -> Result<usize, SearchError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(7)
        }
    }

    #[tokio::test]
    async fn short_query_makes_no_calls() {
        let provider = CountingProvider::new(3);
        let token = CancellationToken::new();
        for query in [None, Some(""), Some("ab"), Some("  a  "), Some(" ab ")] {
            let results = run_search(query, &token, &provider, &SearchConfig::default()).await;
            assert!(results.is_empty());
        }
        assert_eq!(provider.total_calls(), 0);
    }

    #[tokio::test]
    async fn three_characters_after_collapsing_is_searched() {
        let provider = CountingProvider::new(1);
        let token = CancellationToken::new();
        let results = run_search(Some(" a  b "), &token, &provider, &SearchConfig::default()).await;
        assert_eq!(results.len(), 1);
        assert_eq!(provider.searches.load(Ordering::SeqCst), 1);
    }

    /// Serves a fixed list of raw entries.
    struct EntryProvider {
        entries: Vec<ArtistEntry>,
    }

    impl CatalogProvider for EntryProvider {
        async fn search_artists(&self, _query: &str) -> Result<Vec<ArtistEntry>, SearchError> {
            Ok(self.entries.clone())
        }

        async fn thumbnail_url(&self, _artist_uri: &str) -> Result<String, SearchError> {
            Ok("http://img/t.jpg".into())
        }

        async fn album_count(&self, _artist_uri: &str) -> Result<usize, SearchError> {
            Ok(1)
        }
    }

    #[tokio::test]
    async fn skipped_entry_still_uses_a_slot() {
        let mut entries: Vec<ArtistEntry> = (0..6)
            .map(|i| ArtistEntry {
                name: Some(format!("A{i}")),
                href: Some(format!("spotify:artist:{i}")),
                popularity: None,
            })
            .collect();
        entries[0].name = None;

        let provider = EntryProvider { entries };
        let token = CancellationToken::new();
        let results = run_search(Some("artist"), &token, &provider, &SearchConfig::default()).await;
        let titles: Vec<_> = results.iter().map(|r| r.title()).collect();
        assert_eq!(titles, vec!["A1", "A2", "A3", "A4"]);
    }

    #[tokio::test]
    async fn large_response_is_capped() {
        let provider = CountingProvider::new(50);
        let token = CancellationToken::new();
        let results = run_search(Some("daft punk"), &token, &provider, &SearchConfig::default()).await;
        assert_eq!(results.len(), 5);
        assert_eq!(provider.lookups.load(Ordering::SeqCst), 5);
        assert_eq!(provider.embeds.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn provider_order_is_preserved() {
        let provider = CountingProvider::new(3);
        let token = CancellationToken::new();
        let results = run_search(Some("artist"), &token, &provider, &SearchConfig::default()).await;
        let titles: Vec<_> = results.iter().map(|r| r.title()).collect();
        assert_eq!(titles, vec!["Artist 0", "Artist 1", "Artist 2"]);
        assert_eq!(results[1].icon_url(), "http://img/cover640/spotify:artist:1.jpg");
        assert_eq!(results[1].album_count(), Some("7"));
        assert_eq!(results[1].popularity(), Some("0.1"));
    }

    #[tokio::test]
    async fn cancellation_after_k_returns_k() {
        let token = CancellationToken::new();
        let provider = CountingProvider::cancelling(5, 2, token.clone());
        let results = run_search(Some("artist"), &token, &provider, &SearchConfig::default()).await;
        assert_eq!(results.len(), 2);
        assert_eq!(provider.lookups.load(Ordering::SeqCst), 2);
        assert_eq!(provider.embeds.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn cancelled_before_first_candidate_returns_empty() {
        let token = CancellationToken::new();
        token.cancel();
        let provider = CountingProvider::new(4);
        let results = run_search(Some("artist"), &token, &provider, &SearchConfig::default()).await;
        assert!(results.is_empty());
        // The primary search still runs; only candidate iteration is gated.
        assert_eq!(provider.searches.load(Ordering::SeqCst), 1);
        assert_eq!(provider.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn configured_cap_below_maximum() {
        let provider = CountingProvider::new(4);
        let config = SearchConfig {
            max_results: 2,
            ..Default::default()
        };
        let token = CancellationToken::new();
        let results = run_search(Some("artist"), &token, &provider, &config).await;
        assert_eq!(results.len(), 2);
    }

    struct OfflineProvider;

    impl CatalogProvider for OfflineProvider {
        async fn search_artists(&self, _query: &str) -> Result<Vec<ArtistEntry>, SearchError> {
            Err(SearchError::Timeout("artist search: 8s".into()))
        }

        async fn thumbnail_url(&self, _artist_uri: &str) -> Result<String, SearchError> {
            Err(SearchError::Http("offline".into()))
        }

        async fn album_count(&self, _artist_uri: &str) -> Result<usize, SearchError> {
            Err(SearchError::Http("offline".into()))
        }
    }

    #[tokio::test]
    async fn primary_failure_returns_empty() {
        let token = CancellationToken::new();
        let results =
            run_search(Some("daft punk"), &token, &OfflineProvider, &SearchConfig::default()).await;
        assert!(results.is_empty());
    }
}
