//! Error types for the dynamic-DNS endpoint
//!
//! Every failure a request can run into is one variant of [`Error`]. The
//! variant is the error kind; the daemon maps it to an HTTP status.

use thiserror::Error;

/// Result type alias for dyndns operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the dyndns system
#[derive(Error, Debug)]
pub enum Error {
    /// Request path does not match the update route
    #[error("Unknown request path: {0}")]
    NotFound(String),

    /// Missing or wrong shared-secret code
    #[error("Invalid auth code")]
    Forbidden,

    /// Missing or invalid hostname / IP
    #[error("{0}")]
    BadRequest(String),

    /// Zone/record lookup failed or the provider reported `success: false`
    ///
    /// `message` is safe to show to callers. `detail` carries the provider's
    /// own error text and is only meant for logs.
    #[error("{message}")]
    Provider {
        /// Caller-facing message
        message: String,
        /// Provider-reported detail (logged, never returned)
        detail: Option<String>,
    },

    /// Transport failure reaching the provider
    #[error("Network error: {message}")]
    Network {
        /// Error message
        message: String,
        /// Whether the call ran into the per-call timeout
        timed_out: bool,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a "not found" error for an unknown path
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create a bad request error
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Create a provider error without detail
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider {
            message: msg.into(),
            detail: None,
        }
    }

    /// Create a provider error carrying the provider's own detail
    pub fn provider_with_detail(msg: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Provider {
            message: msg.into(),
            detail: Some(detail.into()),
        }
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
            timed_out: false,
        }
    }

    /// Create a network error for a call that hit its timeout
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
            timed_out: true,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Short machine-friendly name of the error kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "not_found",
            Error::Forbidden => "forbidden",
            Error::BadRequest(_) => "bad_request",
            Error::Provider { .. } => "provider_error",
            Error::Network { .. } => "network_error",
            Error::Config(_) => "config_error",
        }
    }
}
