//! Trait definition for the catalog data provider.
//!
//! The pipeline talks to the catalog only through [`CatalogProvider`], so the
//! HTTP implementation ([`crate::catalog::SpotifyCatalog`]) can be swapped for
//! an in-memory one in tests.

use crate::error::SearchError;
use crate::types::ArtistEntry;

/// A source of artist search hits and per-artist enrichment data.
///
/// Each method maps to one GET against the catalog. Implementations report
/// transport and shape problems as [`SearchError`]; the pipeline decides how
/// to absorb them.
///
/// All implementations must be `Send + Sync`.
pub trait CatalogProvider: Send + Sync {
    /// Search artists by a normalised query. Entries come back in provider
    /// rank order and are not truncated.
    fn search_artists(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ArtistEntry>, SearchError>> + Send;

    /// Fetch the raw thumbnail URL for an artist URI.
    fn thumbnail_url(
        &self,
        artist_uri: &str,
    ) -> impl std::future::Future<Output = Result<String, SearchError>> + Send;

    /// Count the albums listed for an artist URI.
    fn album_count(
        &self,
        artist_uri: &str,
    ) -> impl std::future::Future<Output = Result<usize, SearchError>> + Send;
}
