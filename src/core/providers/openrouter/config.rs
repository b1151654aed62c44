//! OpenRouter Routing Configuration
//!
//! Endpoint, attribution and credential settings for routing through OpenRouter

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use super::error::OpenRouterError;
use super::routing::EnvCredential;
use super::streaming::Attribution;
use crate::utils::error::{Result, RoutingError};

/// Provider tag of the aggregator
pub const PROVIDER_NAME: &str = "openrouter";

/// Display name used in usage snapshots
pub const DISPLAY_NAME: &str = "OpenRouter";

/// Fixed aggregator endpoint
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Environment variable holding the aggregator credential
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Default `HTTP-Referer` attribution
pub const DEFAULT_SITE_URL: &str = "https://openclaw.ai";

/// Default `X-Title` attribution
pub const DEFAULT_SITE_NAME: &str = "OpenClaw";

const DEFAULT_USAGE_TIMEOUT_MS: u64 = 10_000;

/// OpenRouter routing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenRouterConfig {
    /// Base URL for OpenRouter API
    pub base_url: String,
    /// Environment variable the credential is read from
    pub api_key_env: String,
    /// Sent as `HTTP-Referer`
    pub site_url: String,
    /// Sent as `X-Title`
    pub site_name: String,
    /// Timeout for the key-info request, in milliseconds
    pub usage_timeout_ms: u64,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: API_KEY_ENV.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            usage_timeout_ms: DEFAULT_USAGE_TIMEOUT_MS,
        }
    }
}

impl OpenRouterConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }

        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("OPENROUTER_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(site_url) = std::env::var("OPENROUTER_SITE_URL") {
            config.site_url = site_url;
        }
        if let Ok(site_name) = std::env::var("OPENROUTER_SITE_NAME") {
            config.site_name = site_name;
        }
        if let Ok(timeout) = std::env::var("OPENROUTER_USAGE_TIMEOUT_MS") {
            config.usage_timeout_ms = timeout
                .parse()
                .map_err(|e| RoutingError::Config(format!("Invalid usage timeout: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from YAML. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading OpenRouter configuration");
        let contents = tokio::fs::read_to_string(path).await?;
        Self::from_yaml_str(&contents)
    }

    pub fn validate(&self) -> std::result::Result<(), OpenRouterError> {
        if self.base_url.is_empty() {
            return Err(OpenRouterError::Configuration(
                "OpenRouter base URL is required".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(OpenRouterError::Configuration(
                "OpenRouter base URL must start with http:// or https://".to_string(),
            ));
        }

        if self.api_key_env.trim().is_empty() {
            return Err(OpenRouterError::Configuration(
                "Credential environment variable name is required".to_string(),
            ));
        }

        if self.usage_timeout_ms == 0 {
            return Err(OpenRouterError::Configuration(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set site URL for the `HTTP-Referer` header
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into();
        self
    }

    /// Set site name for the `X-Title` header
    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = site_name.into();
        self
    }

    /// Set the usage request timeout
    pub fn with_usage_timeout(mut self, timeout: Duration) -> Self {
        self.usage_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn usage_timeout(&self) -> Duration {
        Duration::from_millis(self.usage_timeout_ms)
    }

    /// Credential source reading the configured environment variable
    pub fn credential(&self) -> EnvCredential {
        EnvCredential::new(self.api_key_env.clone())
    }

    pub fn attribution(&self) -> Attribution {
        Attribution::new(self.site_url.clone(), self.site_name.clone())
    }
}
