//! Error handling for the routing crate
//!
//! Provider-level failures use [`OpenRouterError`]; this type wraps them together
//! with configuration and I/O failures for crate-level entry points.

use crate::core::providers::openrouter::OpenRouterError;
use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum RoutingError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Provider errors
    #[error("Provider error: {0}")]
    Provider(#[from] OpenRouterError),
}

impl RoutingError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }
}
