//! Search result types and extraction from upstream payloads.
//!
//! Upstream search responses embed results under `_embedded.results`, each
//! entry carrying an `og_type` tag and HAL-style `_links`. Only entries
//! tagged `artist` are kept; the artist id is the trailing segment of the
//! entry's self link:
//!
//! ```text
//! {
//!   "og_type": "artist",
//!   "title": "Pablo Picasso",
//!   "_links": {
//!     "self":      { "href": ".../artists/4d8b928b4eb68a1b2c0001f2" },
//!     "thumbnail": { "href": "https://.../square.jpg" }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of artists returned from a search.
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// Type tag marking a search result as an artist rather than an artwork,
/// gene, or other catalog entity.
const ARTIST_TYPE_TAG: &str = "artist";

// =============================================================================
// Response Types
// =============================================================================

/// A simplified artist entry derived from one search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    /// Upstream artist identifier (trailing segment of the self link)
    pub id: String,

    /// Display name
    pub name: String,

    /// Thumbnail image URL
    pub image: String,
}

/// Response body for the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Artist-typed results, at most [`SEARCH_RESULT_LIMIT`] entries
    pub artists: Vec<ArtistSummary>,
}

// =============================================================================
// Extraction
// =============================================================================

/// Extract artist summaries from an upstream search payload.
///
/// A body without `_embedded.results` (including upstream error payloads)
/// yields an empty list, and entries missing a required field are skipped
/// rather than failing the whole response.
pub fn extract_artists(body: &Value, limit: usize) -> Vec<ArtistSummary> {
    body.pointer("/_embedded/results")
        .and_then(Value::as_array)
        .map(|results| {
            results
                .iter()
                .filter_map(artist_summary)
                .take(limit)
                .collect()
        })
        .unwrap_or_default()
}

/// Map one search result entry to an [`ArtistSummary`], or `None` if it is
/// not artist-typed or lacks a required field.
fn artist_summary(entry: &Value) -> Option<ArtistSummary> {
    if entry.get("og_type").and_then(Value::as_str) != Some(ARTIST_TYPE_TAG) {
        return None;
    }

    let href = entry.pointer("/_links/self/href")?.as_str()?;
    let id = href.rsplit('/').next()?.to_string();
    let name = entry.get("title")?.as_str()?.to_string();
    let image = entry.pointer("/_links/thumbnail/href")?.as_str()?.to_string();

    Some(ArtistSummary { id, name, image })
}

// =============================================================================
// Tests
// =============================================================================
