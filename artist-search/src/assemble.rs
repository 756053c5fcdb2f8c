//! Result assembly: merge a candidate with its enrichment outcome.

use crate::enrich::Enrichment;
use crate::types::{Candidate, SearchResult};

/// Build the final record for one candidate.
///
/// The icon falls back to `fallback_icon` when no thumbnail was resolved.
/// An unavailable album count stays absent rather than becoming zero.
pub fn assemble(candidate: Candidate, enrichment: Enrichment, fallback_icon: &str) -> SearchResult {
    let icon_url = enrichment
        .thumbnail_url
        .unwrap_or_else(|| fallback_icon.to_owned());

    SearchResult::new(
        candidate.name,
        candidate.href,
        icon_url,
        candidate.popularity,
        enrichment.album_count,
    )
}
