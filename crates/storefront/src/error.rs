//! Error types for storefront SDK operations

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validate::ContractError;

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for storefront SDK operations
#[derive(Error, Debug)]
pub enum Error {
    /// API error returned by the backend
    #[error("API error: {code} - {message}")]
    Api {
        code: String,
        message: String,
        status_code: u16,
        details: Vec<ErrorDetail>,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded. Retry after {retry_after} seconds")]
    RateLimit { retry_after: u64 },

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Payload decoded but broke a declared contract rule
    #[error("Contract violation: {0}")]
    Contract(#[from] ContractError),
}

impl Error {
    /// Returns true if this is a validation error (400)
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Api { status_code: 400, .. })
    }

    /// Returns true if this is an authentication error (401)
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, Error::Api { status_code: 401, .. })
    }

    /// Returns true if this is an authorization error (403)
    pub fn is_authorization_error(&self) -> bool {
        matches!(self, Error::Api { status_code: 403, .. })
    }

    /// Returns true if this is a not found error (404)
    pub fn is_not_found_error(&self) -> bool {
        matches!(self, Error::Api { status_code: 404, .. })
    }

    /// Returns true if this is a rate limit error (429)
    pub fn is_rate_limit_error(&self) -> bool {
        matches!(self, Error::RateLimit { .. })
    }

    /// Returns true if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimit { .. } => true,
            Error::Api { status_code, .. } => *status_code >= 500,
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

/// Field-level detail attached to validation errors
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorDetail {
    pub field: String,
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}
