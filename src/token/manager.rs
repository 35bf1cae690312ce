//! Token acquisition and refresh.
//!
//! The generation loop mirrors the deployment it fronts: transport failures
//! are retried at a fixed delay (unbounded by default), while a rejection
//! from the token endpoint fails immediately with the upstream's status.
//! The retry policy is injectable so tests can bound the loop.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::TokenError;
use crate::upstream::UpstreamApi;

use super::store::TokenStore;

/// Default delay between token generation attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

// =============================================================================
// Retry Policy
// =============================================================================

/// Controls the token generation retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay between attempts after a transport failure
    pub delay: Duration,

    /// Maximum number of attempts; `None` retries forever.
    ///
    /// With the unbounded default a request stuck here waits until the
    /// upstream comes back.
    pub max_attempts: Option<usize>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: DEFAULT_RETRY_DELAY,
            max_attempts: None,
        }
    }
}

impl RetryPolicy {
    /// Unbounded retry at the given delay.
    pub fn unbounded(delay: Duration) -> Self {
        Self {
            delay,
            max_attempts: None,
        }
    }

    /// Retry at the given delay, giving up after `attempts` tries.
    pub fn bounded(delay: Duration, attempts: usize) -> Self {
        Self {
            delay,
            max_attempts: Some(attempts),
        }
    }
}

// =============================================================================
// Token Manager
// =============================================================================

/// Manages the single process-wide upstream token.
///
/// # Example
///
/// ```ignore
/// use artsy_relay::token::{RetryPolicy, TokenManager};
/// use artsy_relay::upstream::HttpUpstream;
///
/// let upstream = Arc::new(HttpUpstream::new("https://api.artsy.net/api"));
/// let tokens = TokenManager::new(upstream, "client-id", "client-secret");
///
/// let token = tokens.ensure().await?;
/// ```
pub struct TokenManager<U: UpstreamApi> {
    upstream: Arc<U>,
    store: TokenStore,
    client_id: String,
    client_secret: String,
    policy: RetryPolicy,
}

impl<U: UpstreamApi> TokenManager<U> {
    /// Create a manager with the default retry policy (1s delay, unbounded).
    pub fn new(
        upstream: Arc<U>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self::with_policy(upstream, client_id, client_secret, RetryPolicy::default())
    }

    /// Create a manager with an explicit retry policy.
    pub fn with_policy(
        upstream: Arc<U>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            upstream,
            store: TokenStore::new(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            policy,
        }
    }

    /// Return the cached token, generating one if absent.
    pub async fn ensure(&self) -> Result<String, TokenError> {
        if let Some(token) = self.store.current().await {
            return Ok(token);
        }
        self.refresh().await
    }

    /// Generate a fresh token and overwrite the cached one.
    pub async fn refresh(&self) -> Result<String, TokenError> {
        let token = self.generate().await?;
        self.store.set(token.clone()).await;
        debug!("upstream token refreshed");
        Ok(token)
    }

    /// The cached token, without generating one.
    pub async fn current(&self) -> Option<String> {
        self.store.current().await
    }

    /// Run the generation loop against the token endpoint.
    ///
    /// Transport failures sleep and retry per the policy; any status outside
    /// {200, 201} is an authentication failure and is not retried.
    async fn generate(&self) -> Result<String, TokenError> {
        let mut attempts = 0usize;

        let response = loop {
            attempts += 1;
            match self
                .upstream
                .request_token(&self.client_id, &self.client_secret)
                .await
            {
                Ok(response) => break response,
                Err(TokenError::Transport(reason)) => {
                    if let Some(max) = self.policy.max_attempts {
                        if attempts >= max {
                            return Err(TokenError::RetriesExhausted { attempts });
                        }
                    }
                    warn!(attempts, "token endpoint unreachable ({}), retrying", reason);
                    tokio::time::sleep(self.policy.delay).await;
                }
                Err(other) => return Err(other),
            }
        };

        if response.status != 200 && response.status != 201 {
            return Err(TokenError::Auth {
                status: response.status,
            });
        }

        let body: Value = response
            .json()
            .map_err(|e| TokenError::Malformed(e.to_string()))?;

        match body.get("token").and_then(Value::as_str) {
            Some(token) => Ok(token.to_string()),
            None => Err(TokenError::Malformed(
                "response body has no token field".to_string(),
            )),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
