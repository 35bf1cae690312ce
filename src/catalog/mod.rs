//! Search and artist-detail proxying.
//!
//! [`CatalogService`] fronts the upstream catalog: it ensures a token,
//! forwards the query, and reshapes search results into the thin
//! [`ArtistSummary`] form the front end consumes. Artist detail records
//! pass through as raw JSON.

pub mod service;
pub mod types;

pub use service::CatalogService;
pub use types::{extract_artists, ArtistSummary, SearchResults, SEARCH_RESULT_LIMIT};
