use thiserror::Error;

/// Errors that can occur while acquiring an upstream API token
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    /// Network or connection error reaching the token endpoint.
    ///
    /// With the default retry policy these are recovered internally and
    /// never surface to a caller.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The token endpoint answered with a status outside {200, 201}
    #[error("Token endpoint rejected credentials with status {status}")]
    Auth { status: u16 },

    /// The token endpoint answered 2xx but the body had no usable token field
    #[error("Malformed token response: {0}")]
    Malformed(String),

    /// A bounded retry policy ran out of attempts
    #[error("Token generation gave up after {attempts} attempt(s)")]
    RetriesExhausted { attempts: usize },
}

/// Errors surfaced by the search and detail proxies
#[derive(Debug, Clone, Error)]
pub enum ProxyError {
    /// Token acquisition failed
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// The upstream catalog API answered with a non-200 status
    #[error("Upstream error: status {status}")]
    Upstream { status: u16 },

    /// Network or connection error reaching the catalog API
    #[error("Transport error: {0}")]
    Transport(String),

    /// The upstream body could not be parsed as JSON
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ProxyError {
    /// The HTTP status code this error should propagate to the caller.
    ///
    /// Upstream-coded errors carry the upstream's own status; everything
    /// else is a 500.
    pub fn status_code(&self) -> u16 {
        match self {
            ProxyError::Token(TokenError::Auth { status }) => *status,
            ProxyError::Upstream { status } => *status,
            ProxyError::Token(_) => 500,
            ProxyError::Transport(_) => 500,
            ProxyError::Decode(_) => 500,
        }
    }
}
