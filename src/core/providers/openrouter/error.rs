//! OpenRouter Error types

use thiserror::Error;

/// OpenRouter specific errors
#[derive(Error, Debug)]
pub enum OpenRouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Parsing error
    #[error("Failed to parse response: {0}")]
    Parsing(String),

    /// Authentication error
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// API error with status code
    #[error("API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for OpenRouterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parsing(err.to_string())
    }
}

impl OpenRouterError {
    /// Map a reqwest send/read failure, keeping timeouts distinct
    pub fn from_reqwest(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout(format!("Request to {} timed out", url))
        } else if err.is_connect() {
            Self::Network(format!("Connection failed to {}: {}", url, err))
        } else if err.is_decode() {
            Self::Parsing(format!("Failed to decode response from {}: {}", url, err))
        } else {
            Self::Network(format!("Request failed: {}", err))
        }
    }

    /// Map a non-success HTTP status to an error
    pub fn from_status(status_code: u16, body: &str) -> Self {
        match status_code {
            401 | 403 => Self::Authentication(format!("HTTP {}: {}", status_code, body)),
            400 => Self::InvalidRequest(body.to_string()),
            _ => Self::ApiError {
                status_code,
                message: body.to_string(),
            },
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Network(_) => "network",
            Self::Parsing(_) => "parsing",
            Self::Authentication(_) => "authentication",
            Self::Timeout(_) => "timeout",
            Self::ApiError { .. } => "api_error",
            Self::InvalidRequest(_) => "invalid_request",
            Self::Other(_) => "other",
        }
    }

    /// Whether a caller-side retry policy could reasonably retry this error.
    /// Nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) => true,
            Self::ApiError { status_code, .. } if *status_code == 429 || *status_code >= 500 => {
                true
            }
            _ => false,
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::ApiError { status_code, .. } => *status_code,
            Self::Authentication(_) => 401,
            Self::Configuration(_) | Self::InvalidRequest(_) => 400,
            Self::Timeout(_) => 504,
            _ => 500,
        }
    }
}
