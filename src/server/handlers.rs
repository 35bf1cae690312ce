//! HTTP request handlers for the proxy endpoints.
//!
//! # Endpoints
//!
//! - `GET /search?keyword=<string>` - search the catalog for artists
//! - `GET /artist/{artist_id}` - fetch a raw artist record
//! - `GET /health` - health check endpoint

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::catalog::{CatalogService, SearchResults};
use crate::error::{ProxyError, TokenError};
use crate::upstream::UpstreamApi;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state containing the catalog service.
///
/// This is passed to all handlers via Axum's State extractor.
pub struct AppState<U: UpstreamApi> {
    /// The catalog service backing the proxy endpoints
    pub catalog: Arc<CatalogService<U>>,
}

impl<U: UpstreamApi> AppState<U> {
    /// Create a new application state with the given catalog service.
    pub fn new(catalog: CatalogService<U>) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

impl<U: UpstreamApi> Clone for AppState<U> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

// =============================================================================
// Request Parameters
// =============================================================================

/// Query parameters for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchQueryParams {
    /// Keyword to search the catalog for
    pub keyword: String,
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response returned for all error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier (e.g., "upstream_error", "auth_error")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code (included for convenience)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: None,
        }
    }

    /// Create a new error response with status code.
    pub fn with_status(
        error: impl Into<String>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: Some(status.as_u16()),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert ProxyError to HTTP response.
///
/// Upstream-coded failures propagate the upstream's status with a generic
/// message; internal failures map to 500. Logged by severity:
/// - 4xx at WARN (or DEBUG for 404s)
/// - 5xx at ERROR
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let (error_type, message) = match &self {
            ProxyError::Token(TokenError::Auth { status }) => (
                "auth_error",
                format!("Error generating upstream token (status {})", status),
            ),
            ProxyError::Token(_) => (
                "token_error",
                "Error generating upstream token".to_string(),
            ),
            ProxyError::Upstream { .. } => {
                ("upstream_error", "Upstream request failed".to_string())
            }
            ProxyError::Transport(_) => (
                "transport_error",
                "Error reaching the upstream API".to_string(),
            ),
            ProxyError::Decode(_) => (
                "decode_error",
                "Upstream returned an unreadable response".to_string(),
            ),
        };

        if status.is_server_error() {
            error!(
                error_type = error_type,
                status = status.as_u16(),
                "Server error: {}",
                self
            );
        } else if status == StatusCode::NOT_FOUND {
            debug!(
                error_type = error_type,
                status = status.as_u16(),
                "Resource not found: {}",
                self
            );
        } else {
            warn!(
                error_type = error_type,
                status = status.as_u16(),
                "Client error: {}",
                self
            );
        }

        let error_response = ErrorResponse::with_status(error_type, message, status);

        (status, Json(error_response)).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle artist search requests.
///
/// # Endpoint
///
/// `GET /search?keyword=<string>`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "artists": [
///     {"id": "4d8b928b4eb68a1b2c0001f2", "name": "Pablo Picasso", "image": "https://..."}
///   ]
/// }
/// ```
///
/// An empty `artists` array is a successful response, not an error.
///
/// # Errors
///
/// - Upstream token endpoint status on authentication failure
/// - `500 Internal Server Error`: transport or decode failure
pub async fn search_handler<U: UpstreamApi>(
    State(state): State<AppState<U>>,
    Query(query): Query<SearchQueryParams>,
) -> Result<Json<SearchResults>, ProxyError> {
    let results = state.catalog.search(&query.keyword).await?;
    Ok(Json(results))
}

/// Handle artist detail requests.
///
/// # Endpoint
///
/// `GET /artist/{artist_id}`
///
/// # Response
///
/// `200 OK` with the upstream artist record, verbatim.
///
/// # Errors
///
/// The upstream's status code with a generic message (404 for an unknown
/// artist, 401 when no valid token is held).
pub async fn artist_handler<U: UpstreamApi>(
    State(state): State<AppState<U>>,
    Path(artist_id): Path<String>,
) -> Result<Json<Value>, ProxyError> {
    let record = state.catalog.artist(&artist_id).await?;
    Ok(Json(record))
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
