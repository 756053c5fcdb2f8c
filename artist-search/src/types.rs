//! Core types: the assembled result record, search candidates, and the wire
//! shapes of the three catalog endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single enriched artist hit.
///
/// Fields are read-only once assembled; the caller owns the value and it is
/// dropped with the list that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    title: String,
    link: String,
    icon_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    popularity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    album_count: Option<String>,
}

impl SearchResult {
    pub(crate) fn new(
        title: String,
        link: String,
        icon_url: String,
        popularity: Option<String>,
        album_count: Option<String>,
    ) -> Self {
        Self {
            title,
            link,
            icon_url,
            popularity,
            album_count,
        }
    }

    /// Artist name.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Artist URI, used verbatim by "open" actions.
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Resolved thumbnail URL, or the fallback icon path.
    pub fn icon_url(&self) -> &str {
        &self.icon_url
    }

    /// Provider popularity, if the entry carried one.
    pub fn popularity(&self) -> Option<&str> {
        self.popularity.as_deref()
    }

    /// Album count as a decimal string, if the lookup succeeded.
    pub fn album_count(&self) -> Option<&str> {
        self.album_count.as_deref()
    }

    /// Optional hints present on this result, keyed for display
    /// (`albums`, `popularity`).
    pub fn metadata(&self) -> BTreeMap<&'static str, &str> {
        let mut hints = BTreeMap::new();
        if let Some(popularity) = self.popularity() {
            hints.insert("popularity", popularity);
        }
        if let Some(albums) = self.album_count() {
            hints.insert("albums", albums);
        }
        hints
    }
}

/// One artist entry from the primary search, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Artist name.
    pub name: String,
    /// Artist URI.
    pub href: String,
    /// Provider popularity, rendered as a string.
    pub popularity: Option<String>,
}

/// Artist search response: `{"artists": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSearchResponse {
    /// Artist entries in provider rank order.
    pub artists: Vec<ArtistEntry>,
}

/// One raw entry of the `artists` array.
///
/// Every field is optional on the wire; [`ArtistEntry::into_candidate`]
/// decides whether the entry is usable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub popularity: Option<Value>,
}

impl ArtistEntry {
    /// Convert to a [`Candidate`], or `None` if `name` or `href` is missing.
    ///
    /// A numeric popularity is rendered to its decimal form; any other
    /// non-string value counts as absent.
    pub fn into_candidate(self) -> Option<Candidate> {
        let name = self.name.filter(|n| !n.is_empty())?;
        let href = self.href.filter(|h| !h.is_empty())?;
        let popularity = match self.popularity {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Some(Candidate {
            name,
            href,
            popularity,
        })
    }
}

/// Artist lookup response: `{"artist": {"albums": [...]}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistLookupResponse {
    pub artist: LookupArtist,
}

/// The `artist` object of a lookup response. Album entries are counted,
/// never inspected.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupArtist {
    pub albums: Vec<Value>,
}

/// Thumbnail embed response: `{"thumbnail_url": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedResponse {
    pub thumbnail_url: String,
}
