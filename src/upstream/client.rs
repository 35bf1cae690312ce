//! HTTP client for the upstream art-catalog API.
//!
//! Three endpoints are used:
//!
//! ```text
//! POST {base}/tokens/xapp_token?client_id=&client_secret=   - token issuance
//! GET  {base}/search?q=&type=artist&size=                   - keyword search
//! GET  {base}/artists/{id}                                  - artist record
//! ```
//!
//! Search and artist requests carry the credential in the `X-Xapp-Token`
//! header. Responses are kept as raw text plus status so each caller decides
//! how leniently to parse the body.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ProxyError, TokenError};

/// Header carrying the upstream bearer token.
pub const XAPP_TOKEN_HEADER: &str = "X-Xapp-Token";

// =============================================================================
// API Response
// =============================================================================

/// A raw response from the upstream API.
///
/// The body is untouched text; use [`ApiResponse::json`] to parse it. Keeping
/// the body unparsed lets status checks run before any decode error can fire.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code returned by the upstream
    pub status: u16,

    /// Raw response body
    pub body: String,
}

impl ApiResponse {
    /// Create a response from a status code and body text.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Create a response with a JSON value as the body.
    pub fn json_body(status: u16, body: &Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

// =============================================================================
// Upstream API Trait
// =============================================================================

/// Interface to the upstream catalog API.
///
/// This is the seam between the proxy logic and the network: production code
/// uses [`HttpUpstream`], tests script responses through a mock. Transport
/// failures (connection refused, DNS, reset) are the only errors these
/// methods produce; any HTTP status comes back as an [`ApiResponse`] for the
/// caller to interpret.
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    /// Request a fresh application token with client credentials.
    async fn request_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<ApiResponse, TokenError>;

    /// Search the catalog for `keyword`, restricted to artist-typed results,
    /// asking for at most `size` entries.
    async fn search(
        &self,
        token: &str,
        keyword: &str,
        size: u32,
    ) -> Result<ApiResponse, ProxyError>;

    /// Fetch the raw artist record for `artist_id`.
    async fn artist(&self, token: &str, artist_id: &str) -> Result<ApiResponse, ProxyError>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// reqwest-backed [`UpstreamApi`] implementation.
///
/// The client is built without a request timeout: a hung upstream call hangs
/// the proxied request, matching the service's no-timeout contract.
pub struct HttpUpstream {
    client: reqwest::Client,
    base: String,
}

impl HttpUpstream {
    /// Create a client against the given base URL.
    ///
    /// A trailing slash on the base is tolerated and stripped.
    pub fn new(base: impl AsRef<str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.as_ref().trim_end_matches('/').to_string(),
        }
    }

    /// The configured base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    async fn read(response: reqwest::Response) -> Result<ApiResponse, reqwest::Error> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl UpstreamApi for HttpUpstream {
    async fn request_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<ApiResponse, TokenError> {
        let response = self
            .client
            .post(format!("{}/tokens/xapp_token", self.base))
            .query(&[("client_id", client_id), ("client_secret", client_secret)])
            .send()
            .await
            .map_err(|e| TokenError::Transport(e.to_string()))?;

        Self::read(response)
            .await
            .map_err(|e| TokenError::Transport(e.to_string()))
    }

    async fn search(
        &self,
        token: &str,
        keyword: &str,
        size: u32,
    ) -> Result<ApiResponse, ProxyError> {
        let response = self
            .client
            .get(format!("{}/search", self.base))
            .header(XAPP_TOKEN_HEADER, token)
            .query(&[
                ("q", keyword),
                ("type", "artist"),
                ("size", &size.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ProxyError::Transport(e.to_string()))?;

        Self::read(response)
            .await
            .map_err(|e| ProxyError::Transport(e.to_string()))
    }

    async fn artist(&self, token: &str, artist_id: &str) -> Result<ApiResponse, ProxyError> {
        let response = self
            .client
            .get(format!("{}/artists/{}", self.base, artist_id))
            .header(XAPP_TOKEN_HEADER, token)
            .send()
            .await
            .map_err(|e| ProxyError::Transport(e.to_string()))?;

        Self::read(response)
            .await
            .map_err(|e| ProxyError::Transport(e.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================
