//! Spotify metadata catalog over HTTP/JSON.
//!
//! Three GET endpoints back the pipeline:
//!
//! - artist search: `?q=artist:<query>` → `{"artists": [{name, href, popularity}, ...]}`
//! - artist lookup: `?uri=<artist uri>&extras=album` → `{"artist": {"albums": [...]}}`
//! - thumbnail embed: `?url=<artist uri>` → `{"thumbnail_url": "..."}`

use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::CatalogProvider;
use crate::types::{ArtistEntry, ArtistLookupResponse, ArtistSearchResponse, EmbedResponse};

/// HTTP implementation of [`CatalogProvider`].
///
/// Holds its own [`reqwest::Client`]; build one per search invocation so
/// independent searches never share transport state.
pub struct SpotifyCatalog {
    client: reqwest::Client,
    search_endpoint: Url,
    lookup_endpoint: Url,
    embed_endpoint: Url,
}

impl SpotifyCatalog {
    /// Create a catalog client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if an endpoint is not a valid URL, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: http::build_client(config)?,
            search_endpoint: parse_endpoint("search_endpoint", &config.search_endpoint)?,
            lookup_endpoint: parse_endpoint("lookup_endpoint", &config.lookup_endpoint)?,
            embed_endpoint: parse_endpoint("embed_endpoint", &config.embed_endpoint)?,
        })
    }

    /// Artist search URL for a normalised query.
    pub(crate) fn search_url(&self, query: &str) -> Url {
        let mut url = self.search_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &format!("artist:{query}"));
        url
    }

    /// Artist lookup URL, asking for the album list.
    pub(crate) fn lookup_url(&self, artist_uri: &str) -> Url {
        let mut url = self.lookup_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("uri", artist_uri)
            .append_pair("extras", "album");
        url
    }

    /// Thumbnail embed URL.
    pub(crate) fn embed_url(&self, artist_uri: &str) -> Url {
        let mut url = self.embed_endpoint.clone();
        url.query_pairs_mut().append_pair("url", artist_uri);
        url
    }
}

fn parse_endpoint(name: &str, raw: &str) -> Result<Url, SearchError> {
    Url::parse(raw).map_err(|e| SearchError::Config(format!("{name} is not a valid URL: {e}")))
}

impl CatalogProvider for SpotifyCatalog {
    async fn search_artists(&self, query: &str) -> Result<Vec<ArtistEntry>, SearchError> {
        tracing::trace!(query, "artist search");
        let response: ArtistSearchResponse =
            http::get_json(&self.client, self.search_url(query), "artist search").await?;
        Ok(response.artists)
    }

    async fn thumbnail_url(&self, artist_uri: &str) -> Result<String, SearchError> {
        let response: EmbedResponse =
            http::get_json(&self.client, self.embed_url(artist_uri), "thumbnail embed").await?;
        Ok(response.thumbnail_url)
    }

    async fn album_count(&self, artist_uri: &str) -> Result<usize, SearchError> {
        let response: ArtistLookupResponse =
            http::get_json(&self.client, self.lookup_url(artist_uri), "artist lookup").await?;
        Ok(response.artist.albums.len())
    }
}
