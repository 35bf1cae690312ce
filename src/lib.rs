//! # Artsy Relay
//!
//! A thin authenticating proxy for the Artsy art-catalog REST API.
//!
//! The upstream API requires an application token on every call. This service
//! holds a single process-wide token, acquires it lazily with fixed client
//! credentials, and forwards two read-only operations while serving a small
//! static front end:
//!
//! - **Search**: keyword search filtered to artist-typed results, reshaped to
//!   a compact `{id, name, image}` list
//! - **Detail**: artist records passed through as raw JSON
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`upstream`] - Catalog API client (trait seam + reqwest implementation)
//! - [`token`] - Token store, retry policy, and manager
//! - [`catalog`] - Search/detail proxy logic and result extraction
//! - [`server`] - Axum-based HTTP server and routes
//! - [`config`] - CLI and configuration types
//! - [`error`] - Error taxonomy
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use artsy_relay::catalog::CatalogService;
//! use artsy_relay::server::{create_router, RouterConfig};
//! use artsy_relay::token::TokenManager;
//! use artsy_relay::upstream::HttpUpstream;
//!
//! #[tokio::main]
//! async fn main() {
//!     let upstream = Arc::new(HttpUpstream::new("https://api.artsy.net/api"));
//!     let tokens = TokenManager::new(Arc::clone(&upstream), "client-id", "client-secret");
//!     let catalog = CatalogService::new(upstream, tokens);
//!
//!     let router = create_router(catalog, RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod server;
pub mod token;
pub mod upstream;

// Re-export commonly used types
pub use catalog::{extract_artists, ArtistSummary, CatalogService, SearchResults, SEARCH_RESULT_LIMIT};
pub use config::Config;
pub use error::{ProxyError, TokenError};
pub use server::{
    artist_handler, create_router, health_handler, search_handler, AppState, ErrorResponse,
    HealthResponse, RouterConfig, SearchQueryParams,
};
pub use token::{RetryPolicy, TokenManager, TokenStore, DEFAULT_RETRY_DELAY};
pub use upstream::{ApiResponse, HttpUpstream, UpstreamApi, XAPP_TOKEN_HEADER};
