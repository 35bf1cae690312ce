//! Test utilities for integration tests.
//!
//! Provides a scriptable mock upstream that records every call, so tests can
//! assert retry counts, the exact query parameters forwarded, and which token
//! each request carried.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use artsy_relay::error::{ProxyError, TokenError};
use artsy_relay::upstream::{ApiResponse, UpstreamApi};

// =============================================================================
// Scripted Outcomes
// =============================================================================

/// One scripted token endpoint outcome.
#[derive(Clone)]
pub enum TokenOutcome {
    /// Simulate a network failure
    Unreachable,

    /// Answer with the given status and body
    Respond(u16, Value),
}

// =============================================================================
// Mock Upstream
// =============================================================================

/// A mock upstream that serves scripted responses and tracks all requests.
///
/// Scripted outcomes are consumed in order; once a script is empty the
/// fallback outcome repeats. The default fallback issues a fresh token per
/// call (`mock-token-1`, `mock-token-2`, ...) and answers searches with an
/// empty result embedding.
pub struct MockUpstream {
    token_script: RwLock<VecDeque<TokenOutcome>>,
    token_fallback: TokenOutcome,
    search_script: RwLock<VecDeque<(u16, Value)>>,
    artists: HashMap<String, (u16, Value)>,

    token_calls: Arc<AtomicUsize>,
    /// Every search call as (token, keyword, size)
    search_log: Arc<RwLock<Vec<(String, String, u32)>>>,
    /// Every artist call as (token, artist_id)
    artist_log: Arc<RwLock<Vec<(String, String)>>>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self {
            token_script: RwLock::new(VecDeque::new()),
            token_fallback: TokenOutcome::Respond(201, Value::Null),
            search_script: RwLock::new(VecDeque::new()),
            artists: HashMap::new(),
            token_calls: Arc::new(AtomicUsize::new(0)),
            search_log: Arc::new(RwLock::new(Vec::new())),
            artist_log: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Script `n` transport failures before the fallback applies.
    pub fn with_token_failures(self, n: usize) -> Self {
        {
            let mut script = self.token_script.try_write().unwrap();
            for _ in 0..n {
                script.push_back(TokenOutcome::Unreachable);
            }
        }
        self
    }

    /// Make every unscripted token call answer with this status.
    pub fn with_token_status(mut self, status: u16) -> Self {
        self.token_fallback = TokenOutcome::Respond(status, json!({"type": "auth_error"}));
        self
    }

    /// Make every unscripted token call fail at the transport level.
    pub fn with_token_unreachable(mut self) -> Self {
        self.token_fallback = TokenOutcome::Unreachable;
        self
    }

    /// Script the next search response.
    pub fn with_search_response(self, status: u16, body: Value) -> Self {
        self.search_script
            .try_write()
            .unwrap()
            .push_back((status, body));
        self
    }

    /// Register an artist record (or error body) for an id.
    pub fn with_artist(mut self, artist_id: impl Into<String>, status: u16, body: Value) -> Self {
        self.artists.insert(artist_id.into(), (status, body));
        self
    }

    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub async fn search_log(&self) -> Vec<(String, String, u32)> {
        self.search_log.read().await.clone()
    }

    pub async fn artist_log(&self) -> Vec<(String, String)> {
        self.artist_log.read().await.clone()
    }
}

impl Default for MockUpstream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamApi for MockUpstream {
    async fn request_token(
        &self,
        _client_id: &str,
        _client_secret: &str,
    ) -> Result<ApiResponse, TokenError> {
        let call = self.token_calls.fetch_add(1, Ordering::SeqCst) + 1;

        let outcome = self
            .token_script
            .write()
            .await
            .pop_front()
            .unwrap_or_else(|| self.token_fallback.clone());

        match outcome {
            TokenOutcome::Unreachable => {
                Err(TokenError::Transport("connection refused".to_string()))
            }
            TokenOutcome::Respond(status, body) => {
                let body = if body.is_null() {
                    json!({"token": format!("mock-token-{call}")})
                } else {
                    body
                };
                Ok(ApiResponse::json_body(status, &body))
            }
        }
    }

    async fn search(
        &self,
        token: &str,
        keyword: &str,
        size: u32,
    ) -> Result<ApiResponse, ProxyError> {
        self.search_log
            .write()
            .await
            .push((token.to_string(), keyword.to_string(), size));

        let (status, body) = self
            .search_script
            .write()
            .await
            .pop_front()
            .unwrap_or_else(|| (200, json!({"_embedded": {"results": []}})));

        Ok(ApiResponse::json_body(status, &body))
    }

    async fn artist(&self, token: &str, artist_id: &str) -> Result<ApiResponse, ProxyError> {
        self.artist_log
            .write()
            .await
            .push((token.to_string(), artist_id.to_string()));

        let (status, body) = self
            .artists
            .get(artist_id)
            .cloned()
            .unwrap_or((404, json!({"type": "not_found"})));

        Ok(ApiResponse::json_body(status, &body))
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// A search result entry in the upstream's embedding shape.
pub fn search_entry(og_type: &str, href: &str, title: &str, thumbnail: &str) -> Value {
    json!({
        "og_type": og_type,
        "title": title,
        "_links": {
            "self": { "href": href },
            "thumbnail": { "href": thumbnail }
        }
    })
}

/// Wrap entries into a full search response body.
pub fn search_body(entries: Vec<Value>) -> Value {
    json!({ "_embedded": { "results": entries } })
}

/// The Picasso entry used across scenario tests.
pub fn picasso_entry() -> Value {
    search_entry(
        "artist",
        "https://api.example.test/api/artists/4d8b928b4eb68a1b2c0001f2",
        "Pablo Picasso",
        "https://img.example.test/picasso/square.jpg",
    )
}

/// Build a catalog service over a mock with a fast, bounded-free retry loop.
pub fn catalog(
    upstream: Arc<MockUpstream>,
) -> artsy_relay::catalog::CatalogService<MockUpstream> {
    use std::time::Duration;

    use artsy_relay::catalog::CatalogService;
    use artsy_relay::token::{RetryPolicy, TokenManager};

    let tokens = TokenManager::with_policy(
        Arc::clone(&upstream),
        "test-id",
        "test-secret",
        RetryPolicy::unbounded(Duration::from_millis(1)),
    );
    CatalogService::new(upstream, tokens)
}
