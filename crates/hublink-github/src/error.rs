//! Error types for hublink-github.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Authentication failed (HTTP 401).
    #[error("GitHub authentication failed - check your token")]
    AuthenticationFailed,

    /// API rate limit exceeded (HTTP 403 with `x-ratelimit-remaining: 0`).
    #[error("GitHub API rate limit exceeded - wait for reset and try again")]
    RateLimited {
        /// Requests per hour, from `x-ratelimit-limit`.
        limit: Option<u64>,
        /// Remaining requests, from `x-ratelimit-remaining`.
        remaining: Option<u64>,
        /// Unix timestamp of the reset, from `x-ratelimit-reset`.
        reset: Option<u64>,
    },

    /// Access forbidden for a non-rate-limit reason (HTTP 403).
    #[error("access to GitHub resource is forbidden: {message}")]
    Forbidden {
        /// Message from the API body.
        message: String,
    },

    /// Resource not found or no access (HTTP 404).
    #[error("GitHub resource not found: {message}")]
    NotFound {
        /// Message from the API body.
        message: String,
    },

    /// Request validation failed (HTTP 422).
    #[error("GitHub API validation failed: {message}")]
    Validation {
        /// Message from the API body.
        message: String,
        /// The `errors` array from the body, when present.
        errors: Vec<serde_json::Value>,
    },

    /// Server-side failure (HTTP 500, 502, 503, 504).
    #[error("GitHub API server error ({status})")]
    Server {
        /// The HTTP status code.
        status: u16,
    },

    /// Any other non-success response.
    #[error("GitHub API error ({status}): {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// Raw body text.
        message: String,
    },

    /// Network error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("failed to parse GitHub response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Repository identifier failed validation.
    #[error("invalid repository '{input}': {reason}")]
    InvalidRepository {
        /// The offending input.
        input: String,
        /// Which rule was violated.
        reason: String,
    },

    /// An operation needed the ambient repository context but none was set.
    #[error("no repository context set - call context::set_current() first")]
    NoRepoContext,

    /// Device flow authentication failed.
    #[error(transparent)]
    DeviceFlow(#[from] hublink_oauth::DeviceFlowError),
}
