//! Crate-wide error hierarchy for repo-context-engine.

use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type RepoContextResult<T> = Result<T, RepoContextError>;

/// Root error type for the repo-context-engine crate.
#[derive(Debug, Error)]
pub enum RepoContextError {
    /// Hosting-provider related failure (auth, not-found, transport).
    #[error(transparent)]
    Provider(#[from] RepoProviderError),

    /// Retrieved content was not valid UTF-8 text.
    #[error("decode error: {0}")]
    Decode(String),

    /// Input validation errors (bad repository identifiers, etc.).
    #[error("validation error: {0}")]
    Validation(String),

    /// Generic catch-all error when nothing else fits.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Provider-specific error used inside the provider layer.
#[derive(Debug, Error)]
pub enum RepoProviderError {
    /// Unauthorized (HTTP 401) — usually a missing or invalid access token.
    #[error("unauthorized")]
    Unauthorized,

    /// Forbidden (HTTP 403).
    #[error("forbidden")]
    Forbidden,

    /// Not found (HTTP 404) — unknown repository or path.
    #[error("not found")]
    NotFound,

    /// Rate limited (HTTP 429).
    #[error("rate limited")]
    RateLimited {
        /// Optional `Retry-After` hint in seconds when available.
        retry_after_secs: Option<u64>,
    },

    /// Gateway / server error (HTTP 5xx).
    #[error("server error: status {0}")]
    Server(u16),

    /// Other HTTP status (non-2xx) not covered by specific variants.
    #[error("http status error: status {0}")]
    HttpStatus(u16),

    /// Timeout at transport level.
    #[error("timeout")]
    Timeout,

    /// Network/transport failure without HTTP status (DNS/connect/reset).
    #[error("network error: {0}")]
    Network(String),

    /// Unexpected/invalid shape of provider response.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

// ===== Conversions for `?` ergonomics at the crate root =====

impl From<reqwest::Error> for RepoContextError {
    fn from(e: reqwest::Error) -> Self {
        RepoContextError::Provider(RepoProviderError::from(e))
    }
}

// ===== Mapping from reqwest::Error into RepoProviderError =====

impl From<reqwest::Error> for RepoProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return RepoProviderError::Timeout;
        }

        if let Some(status) = e.status() {
            let code = status.as_u16();
            return match code {
                401 => RepoProviderError::Unauthorized,
                403 => RepoProviderError::Forbidden,
                404 => RepoProviderError::NotFound,
                429 => RepoProviderError::RateLimited {
                    retry_after_secs: None,
                },
                500..=599 => RepoProviderError::Server(code),
                _ => RepoProviderError::HttpStatus(code),
            };
        }

        RepoProviderError::Network(e.to_string())
    }
}
