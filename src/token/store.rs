//! Shared storage for the current upstream token.

use std::sync::Arc;

use tokio::sync::RwLock;

/// Holds the single live token behind a read-write lock.
///
/// Readers observe either a complete token or none. Concurrent writers race
/// benignly: the last writer wins and the loser's token was valid anyway,
/// the only cost being a redundant upstream call.
#[derive(Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current token, if one has been generated.
    pub async fn current(&self) -> Option<String> {
        self.inner.read().await.clone()
    }

    /// Replace the stored token.
    pub async fn set(&self, token: String) {
        *self.inner.write().await = Some(token);
    }

    /// Whether a token is currently held.
    pub async fn is_set(&self) -> bool {
        self.inner.read().await.is_some()
    }
}
