//! Configuration management for Artsy Relay.
//!
//! This module provides a flexible configuration system that supports:
//! - Command-line arguments via clap
//! - Environment variables with `ARTSY_` prefix
//! - Sensible defaults for all settings
//!
//! # Example
//!
//! ```ignore
//! use artsy_relay::config::Config;
//!
//! // Parse from command line and environment
//! let config = Config::parse();
//!
//! println!("Listening on {}:{}", config.host, config.port);
//! println!("Upstream API: {}", config.upstream_base);
//! ```
//!
//! # Environment Variables
//!
//! All configuration options can be set via environment variables with the `ARTSY_` prefix:
//!
//! - `ARTSY_HOST` - Server bind address (default: 0.0.0.0)
//! - `ARTSY_PORT` - Server port (default: 8000)
//! - `ARTSY_UPSTREAM_BASE` - Upstream API base URL
//! - `ARTSY_CLIENT_ID` / `ARTSY_CLIENT_SECRET` - Upstream API credentials
//! - `ARTSY_TOKEN_RETRY_MS` - Delay between token retries (default: 1000)
//! - `ARTSY_TOKEN_MAX_ATTEMPTS` - Bound on token attempts (default: unbounded)
//! - `ARTSY_INDEX_FILE` - Path to the index page (default: index.html)
//! - `ARTSY_STATIC_DIR` - Path to the static asset directory (default: static)

use std::time::Duration;

use clap::Parser;

use crate::token::RetryPolicy;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default upstream API base URL.
pub const DEFAULT_UPSTREAM_BASE: &str = "https://api.artsy.net/api";

/// Default upstream client id.
///
/// These credentials ship in source so the binary runs out of the box against
/// the public catalog. Override with `--client-id` / `ARTSY_CLIENT_ID` for any
/// other deployment.
pub const DEFAULT_CLIENT_ID: &str = "e4837ed4288e90964c88";

/// Default upstream client secret.
pub const DEFAULT_CLIENT_SECRET: &str = "28cf5dabdbc7522155b01add560fc196";

/// Default delay between token generation retries, in milliseconds.
pub const DEFAULT_TOKEN_RETRY_MS: u64 = 1000;

/// Default index page path.
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// Default static asset directory.
pub const DEFAULT_STATIC_DIR: &str = "static";

// =============================================================================
// CLI Arguments
// =============================================================================

/// Artsy Relay - an authenticating proxy for the Artsy art-catalog API.
///
/// Forwards search and artist-detail requests to the upstream catalog,
/// injecting an X-Xapp-Token credential, and serves a small static front end.
#[derive(Parser, Debug, Clone)]
#[command(name = "artsy-relay")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "ARTSY_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "ARTSY_PORT")]
    pub port: u16,

    // =========================================================================
    // Upstream Configuration
    // =========================================================================
    /// Base URL of the upstream catalog API.
    #[arg(long, default_value = DEFAULT_UPSTREAM_BASE, env = "ARTSY_UPSTREAM_BASE")]
    pub upstream_base: String,

    /// Client id for the upstream token endpoint.
    #[arg(long, default_value = DEFAULT_CLIENT_ID, env = "ARTSY_CLIENT_ID")]
    pub client_id: String,

    /// Client secret for the upstream token endpoint.
    #[arg(long, default_value = DEFAULT_CLIENT_SECRET, env = "ARTSY_CLIENT_SECRET")]
    pub client_secret: String,

    // =========================================================================
    // Token Retry Configuration
    // =========================================================================
    /// Delay in milliseconds between token generation retries.
    #[arg(long, default_value_t = DEFAULT_TOKEN_RETRY_MS, env = "ARTSY_TOKEN_RETRY_MS")]
    pub token_retry_ms: u64,

    /// Maximum number of token generation attempts.
    ///
    /// When unset the generation loop retries transport failures forever,
    /// once per retry delay. A request blocked in that loop waits until the
    /// upstream comes back.
    #[arg(long, env = "ARTSY_TOKEN_MAX_ATTEMPTS")]
    pub token_max_attempts: Option<usize>,

    // =========================================================================
    // Front-end Configuration
    // =========================================================================
    /// Path to the HTML file served at `/`.
    #[arg(long, default_value = DEFAULT_INDEX_FILE, env = "ARTSY_INDEX_FILE")]
    pub index_file: String,

    /// Directory served under `/static`.
    #[arg(long, default_value = DEFAULT_STATIC_DIR, env = "ARTSY_STATIC_DIR")]
    pub static_dir: String,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "ARTSY_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.upstream_base.is_empty() {
            return Err(
                "Upstream base URL is required. Set --upstream-base or ARTSY_UPSTREAM_BASE"
                    .to_string(),
            );
        }

        if url::Url::parse(&self.upstream_base).is_err() {
            return Err(format!(
                "Upstream base URL is not a valid URL: {}",
                self.upstream_base
            ));
        }

        if self.client_id.is_empty() || self.client_secret.is_empty() {
            return Err("Upstream client credentials must not be empty".to_string());
        }

        if self.token_max_attempts == Some(0) {
            return Err("token_max_attempts must be greater than 0 when set".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the token retry policy from the configured delay and bound.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            delay: Duration::from_millis(self.token_retry_ms),
            max_attempts: self.token_max_attempts,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
