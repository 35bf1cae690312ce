//! Catalog service orchestrating token management and upstream calls.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      CatalogService                        │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │                  search(keyword)                     │  │
//! │  │  1. Ensure token      3. On non-200: refresh + retry │  │
//! │  │  2. Query upstream    4. Extract artist summaries    │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! │            │                          │                    │
//! │            ▼                          ▼                    │
//! │     ┌──────────────┐          ┌──────────────┐             │
//! │     │ TokenManager │          │  UpstreamApi │             │
//! │     └──────────────┘          └──────────────┘             │
//! └────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::ProxyError;
use crate::token::TokenManager;
use crate::upstream::UpstreamApi;

use super::types::{extract_artists, SearchResults, SEARCH_RESULT_LIMIT};

/// Proxies search and artist-detail requests to the upstream catalog.
///
/// # Type Parameters
///
/// * `U` - The upstream API implementation (HTTP in production, scripted in
///   tests)
pub struct CatalogService<U: UpstreamApi> {
    /// Upstream catalog API
    upstream: Arc<U>,

    /// Process-wide token manager
    tokens: TokenManager<U>,
}

impl<U: UpstreamApi> CatalogService<U> {
    /// Create a service over the given upstream and token manager.
    pub fn new(upstream: Arc<U>, tokens: TokenManager<U>) -> Self {
        Self { upstream, tokens }
    }

    /// Access the token manager.
    pub fn tokens(&self) -> &TokenManager<U> {
        &self.tokens
    }

    /// Search the catalog for artists matching `keyword`.
    ///
    /// Ensures a token, queries the upstream (type=artist, capped at
    /// [`SEARCH_RESULT_LIMIT`]), and on a non-200 answer refreshes the token
    /// and retries the same query exactly once. The final body is extracted
    /// whatever its status: an upstream error payload simply carries no
    /// artist entries, so the caller sees an empty list rather than an error.
    pub async fn search(&self, keyword: &str) -> Result<SearchResults, ProxyError> {
        let token = self.tokens.ensure().await?;

        let mut response = self
            .upstream
            .search(&token, keyword, SEARCH_RESULT_LIMIT as u32)
            .await?;

        if response.status != 200 {
            // The cached token may be stale; refresh and retry once.
            debug!(
                status = response.status,
                keyword, "search rejected, refreshing token"
            );
            let token = self.tokens.refresh().await?;
            response = self
                .upstream
                .search(&token, keyword, SEARCH_RESULT_LIMIT as u32)
                .await?;
        }

        let body: Value = response
            .json()
            .map_err(|e| ProxyError::Decode(e.to_string()))?;

        Ok(SearchResults {
            artists: extract_artists(&body, SEARCH_RESULT_LIMIT),
        })
    }

    /// Fetch the raw artist record for `artist_id`.
    ///
    /// Uses whatever token is currently cached without ensuring one first;
    /// a process that has never searched presents an empty credential and
    /// the upstream's rejection is propagated with its status code.
    pub async fn artist(&self, artist_id: &str) -> Result<Value, ProxyError> {
        let token = self.tokens.current().await.unwrap_or_default();

        let response = self.upstream.artist(&token, artist_id).await?;

        if response.status != 200 {
            return Err(ProxyError::Upstream {
                status: response.status,
            });
        }

        response
            .json()
            .map_err(|e| ProxyError::Decode(e.to_string()))
    }
}
