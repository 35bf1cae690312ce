//! Router configuration for Artsy Relay.
//!
//! This module defines the HTTP routes and applies middleware for CORS and
//! request tracing, plus the static front-end routes.
//!
//! # Route Structure
//!
//! ```text
//! /search?keyword=     - artist search (proxied)
//! /artist/{artist_id}  - raw artist record (proxied)
//! /health              - health check
//! /                    - index page (static file)
//! /static/*            - static asset directory
//! ```
//!
//! # Example
//!
//! ```ignore
//! use artsy_relay::server::{create_router, RouterConfig};
//! use artsy_relay::catalog::CatalogService;
//!
//! let catalog = CatalogService::new(upstream, tokens);
//! let config = RouterConfig::new()
//!     .with_frontend("index.html", "static");
//!
//! let router = create_router(catalog, config);
//!
//! // Run the server
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{routing::get, Router};
use http::header::{ACCEPT, CONTENT_TYPE};
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::handlers::{artist_handler, health_handler, search_handler, AppState};
use crate::catalog::CatalogService;
use crate::upstream::UpstreamApi;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Clone)]
pub struct RouterConfig {
    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Whether to enable request tracing
    pub enable_tracing: bool,

    /// Path to the HTML file served at `/` (None = no index route)
    pub index_file: Option<String>,

    /// Directory served under `/static` (None = no static route)
    pub static_dir: Option<String>,
}

impl RouterConfig {
    /// Create a new router configuration.
    ///
    /// By default:
    /// - CORS allows any origin
    /// - Tracing is enabled
    /// - No front-end routes are mounted
    pub fn new() -> Self {
        Self {
            cors_origins: None, // Allow any origin by default
            enable_tracing: true,
            index_file: None,
            static_dir: None,
        }
    }

    /// Mount the index page and static asset directory.
    pub fn with_frontend(
        mut self,
        index_file: impl Into<String>,
        static_dir: impl Into<String>,
    ) -> Self {
        self.index_file = Some(index_file.into());
        self.static_dir = Some(static_dir.into());
        self
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass None (or don't call this method) to allow any origin.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// This function builds the complete Axum router with:
/// - The proxy routes (`/search`, `/artist/{artist_id}`)
/// - The health check
/// - Static front-end routes when configured
/// - CORS configuration
/// - Request tracing (optional)
pub fn create_router<U>(catalog: CatalogService<U>, config: RouterConfig) -> Router
where
    U: UpstreamApi + 'static,
{
    let app_state = AppState::new(catalog);

    let cors = build_cors_layer(&config);

    let mut router = Router::new()
        .route("/search", get(search_handler::<U>))
        .route("/artist/{artist_id}", get(artist_handler::<U>))
        .route("/health", get(health_handler))
        .with_state(app_state);

    if let Some(ref index_file) = config.index_file {
        router = router.route_service("/", ServeFile::new(index_file));
    }

    if let Some(ref static_dir) = config.static_dir {
        router = router.nest_service("/static", ServeDir::new(static_dir));
    }

    let router = router.layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => {
            // No origins allowed - this effectively disables CORS
            cors
        }
        Some(origins) => {
            // Parse origins into HeaderValues
            let parsed_origins: Vec<http::HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
