//! Process-wide upstream token management.
//!
//! One bearer token is live at a time, held in a [`TokenStore`] and
//! replaced wholesale by [`TokenManager::refresh`]. There is no expiry
//! tracking: staleness is detected when an upstream call fails and the
//! caller asks for a refresh.

pub mod manager;
pub mod store;

pub use manager::{RetryPolicy, TokenManager, DEFAULT_RETRY_DELAY};
pub use store::TokenStore;
