//! HTTP server layer for Artsy Relay.
//!
//! # Route Structure
//!
//! ```text
//! /search?keyword=     - artist search (proxied)
//! /artist/{artist_id}  - raw artist record (proxied)
//! /health              - health check
//! /                    - static index page
//! /static/*            - static assets
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    artist_handler, health_handler, search_handler, AppState, ErrorResponse, HealthResponse,
    SearchQueryParams,
};
pub use routes::{create_router, RouterConfig};
