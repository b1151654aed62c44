//! OpenRouter account usage
//!
//! Reads `GET /auth/key` and reshapes it into a [`UsageSnapshot`]. A non-success
//! status is reported inside the snapshot; only transport failures are errors.

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::config::{DEFAULT_BASE_URL, DISPLAY_NAME, PROVIDER_NAME};
use super::error::OpenRouterError;
use crate::core::types::{UsageSnapshot, UsageWindow};

/// Label of the single credit window
pub const CREDIT_WINDOW_LABEL: &str = "Credit";

/// Plan label for free-tier keys
pub const FREE_TIER_PLAN: &str = "Free Tier";

/// Response of `GET /auth/key`. `rate_limit` is not modeled.
#[derive(Debug, Clone, Default, Deserialize)]
struct KeyInfoResponse {
    #[serde(default, deserialize_with = "lenient")]
    data: Option<KeyInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct KeyInfo {
    #[serde(default, deserialize_with = "lenient")]
    label: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    usage: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    limit: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    is_free_tier: Option<bool>,
}

/// Accept any JSON value, keeping it only when it has the expected type
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Fetch usage from the public OpenRouter endpoint
pub async fn fetch_openrouter_usage(
    api_key: &str,
    timeout: Duration,
    client: &Client,
) -> Result<UsageSnapshot, OpenRouterError> {
    fetch_openrouter_usage_at(DEFAULT_BASE_URL, api_key, timeout, client).await
}

/// Fetch usage from `{base_url}/auth/key`
pub async fn fetch_openrouter_usage_at(
    base_url: &str,
    api_key: &str,
    timeout: Duration,
    client: &Client,
) -> Result<UsageSnapshot, OpenRouterError> {
    let url = format!("{}/auth/key", base_url.trim_end_matches('/'));
    debug!(provider = PROVIDER_NAME, url = %url, "Fetching OpenRouter key usage");

    let response = client
        .get(&url)
        .bearer_auth(api_key)
        .header(ACCEPT, "application/json")
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| OpenRouterError::from_reqwest(e, &url))?;

    let status = response.status();
    if !status.is_success() {
        warn!(
            provider = PROVIDER_NAME,
            status = status.as_u16(),
            "OpenRouter key usage request failed"
        );
        return Ok(UsageSnapshot::failed(
            PROVIDER_NAME,
            DISPLAY_NAME,
            format!("HTTP {}", status.as_u16()),
        ));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| OpenRouterError::from_reqwest(e, &url))?;
    let value = match serde_json::from_slice::<Value>(&body) {
        Ok(value) => value,
        // Well-formed JSON that `Value` cannot hold, such as numbers beyond f64
        Err(e) if serde_json::from_slice::<IgnoredAny>(&body).is_ok() => {
            warn!(
                provider = PROVIDER_NAME,
                error = %e,
                "Unrepresentable OpenRouter key info body"
            );
            Value::Null
        }
        Err(e) => return Err(e.into()),
    };

    Ok(normalize_key_info(value))
}

/// Reshape a key-info JSON body into a usage snapshot.
///
/// Missing or mistyped fields fall back to zero usage, no limit and no plan.
pub fn normalize_key_info(body: Value) -> UsageSnapshot {
    let response: KeyInfoResponse = serde_json::from_value(body).unwrap_or_else(|e| {
        warn!(
            provider = PROVIDER_NAME,
            error = %e,
            "Unexpected OpenRouter key info shape"
        );
        KeyInfoResponse::default()
    });
    let info = response.data.unwrap_or_default();

    let usage = info.usage.unwrap_or(0.0);
    let windows = match info.limit {
        Some(limit) if limit > 0.0 => {
            vec![UsageWindow::new(CREDIT_WINDOW_LABEL, usage / limit * 100.0)]
        }
        _ => Vec::new(),
    };

    let plan = if info.is_free_tier == Some(true) {
        Some(FREE_TIER_PLAN.to_string())
    } else {
        info.label.filter(|label| !label.is_empty())
    };

    UsageSnapshot {
        provider: PROVIDER_NAME.to_string(),
        display_name: DISPLAY_NAME.to_string(),
        windows,
        plan,
        error: None,
    }
}
