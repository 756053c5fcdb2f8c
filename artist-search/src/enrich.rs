//! Per-candidate enrichment: thumbnail resolution and album counting.
//!
//! Both sub-fetches are independent. A failure in either is logged and turns
//! into an absent field for that candidate only; it never aborts the search.

use crate::provider::CatalogProvider;

/// Marker that identifies a resizable cover image in a thumbnail URL.
pub const COVER_MARKER: &str = "cover";

/// Size token inserted after [`COVER_MARKER`] to request the large variant.
pub const COVER_SIZE: &str = "640";

/// Outcome of enriching one candidate. `None` means "unavailable".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enrichment {
    /// Thumbnail URL, already upgraded to the large variant.
    pub thumbnail_url: Option<String>,
    /// Album count as a decimal string.
    pub album_count: Option<String>,
}

/// Run both enrichment fetches for one artist, album lookup first.
pub async fn enrich<P: CatalogProvider>(provider: &P, artist_uri: &str) -> Enrichment {
    let album_count = count_albums(provider, artist_uri).await;
    let thumbnail_url = resolve_thumbnail(provider, artist_uri).await;
    Enrichment {
        thumbnail_url,
        album_count,
    }
}

/// Fetch the artist thumbnail and upgrade it with [`upgrade_thumbnail_url`].
pub async fn resolve_thumbnail<P: CatalogProvider>(provider: &P, artist_uri: &str) -> Option<String> {
    match provider.thumbnail_url(artist_uri).await {
        Ok(raw) => Some(upgrade_thumbnail_url(&raw)),
        Err(err) => {
            tracing::debug!(artist_uri, error = %err, "thumbnail unavailable");
            None
        }
    }
}

/// Look up the artist and count its albums.
pub async fn count_albums<P: CatalogProvider>(provider: &P, artist_uri: &str) -> Option<String> {
    match provider.album_count(artist_uri).await {
        Ok(count) => Some(count.to_string()),
        Err(err) => {
            tracing::debug!(artist_uri, error = %err, "album count unavailable");
            None
        }
    }
}

/// Insert [`COVER_SIZE`] immediately after the first [`COVER_MARKER`].
///
/// Later occurrences of the marker are left untouched; a URL without the
/// marker is returned unchanged.
pub fn upgrade_thumbnail_url(url: &str) -> String {
    match url.find(COVER_MARKER) {
        Some(start) => {
            let split = start + COVER_MARKER.len();
            let mut upgraded = String::with_capacity(url.len() + COVER_SIZE.len());
            upgraded.push_str(&url[..split]);
            upgraded.push_str(COVER_SIZE);
            upgraded.push_str(&url[split..]);
            upgraded
        }
        None => url.to_owned(),
    }
}
