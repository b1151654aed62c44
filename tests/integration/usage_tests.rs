//! Usage snapshot integration tests

#[cfg(test)]
mod tests {
    use openrouter_routing::{OpenRouterConfig, OpenRouterError, fetch_openrouter_usage_at};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn key_endpoint(response: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/key"))
            .and(header("authorization", "Bearer sk-or-v1-usage"))
            .respond_with(response)
            .mount(&server)
            .await;
        server
    }

    fn config(server: &MockServer) -> OpenRouterConfig {
        OpenRouterConfig::default()
            .with_base_url(format!("{}/api/v1", server.uri()))
            .with_usage_timeout(Duration::from_secs(5))
    }

    /// Test a limited free-tier key
    #[tokio::test]
    async fn test_limited_free_tier_key() {
        let server = key_endpoint(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "label": "sk-or-v1-abc...xyz",
                "usage": 1.5,
                "limit": 6.0,
                "is_free_tier": true,
                "rate_limit": {"requests": 20, "interval": "10s"}
            }
        })))
        .await;
        let config = config(&server);

        let snapshot = fetch_openrouter_usage_at(
            &config.base_url,
            "sk-or-v1-usage",
            config.usage_timeout(),
            &reqwest::Client::new(),
        )
        .await
        .unwrap();

        assert_eq!(snapshot.provider, "openrouter");
        assert_eq!(snapshot.display_name, "OpenRouter");
        assert_eq!(snapshot.plan.as_deref(), Some("Free Tier"));
        assert_eq!(snapshot.windows.len(), 1);
        assert_eq!(snapshot.windows[0].label, "Credit");
        assert_eq!(snapshot.windows[0].used_percent, 25.0);
        assert!(!snapshot.is_error());
    }

    /// Test a paid key without a spending limit
    #[tokio::test]
    async fn test_unlimited_labelled_key() {
        let server = key_endpoint(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"label": "production", "usage": 42.0, "limit": null, "is_free_tier": false}
        })))
        .await;
        let config = config(&server);

        let snapshot = fetch_openrouter_usage_at(
            &config.base_url,
            "sk-or-v1-usage",
            config.usage_timeout(),
            &reqwest::Client::new(),
        )
        .await
        .unwrap();

        assert!(snapshot.windows.is_empty());
        assert_eq!(snapshot.plan.as_deref(), Some("production"));

        let rendered = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(rendered["displayName"], "OpenRouter");
        assert!(rendered.get("error").is_none());
    }

    /// Test that an HTTP failure is reported inside the snapshot
    #[tokio::test]
    async fn test_server_error_reported_in_snapshot() {
        let server = key_endpoint(ResponseTemplate::new(500)).await;
        let config = config(&server);

        let snapshot = fetch_openrouter_usage_at(
            &config.base_url,
            "sk-or-v1-usage",
            config.usage_timeout(),
            &reqwest::Client::new(),
        )
        .await
        .unwrap();

        assert!(snapshot.is_error());
        assert_eq!(snapshot.error.as_deref(), Some("HTTP 500"));
        assert!(snapshot.windows.is_empty());
        assert!(snapshot.plan.is_none());
    }

    /// Test that an unreachable endpoint is a transport error
    #[tokio::test]
    async fn test_unreachable_endpoint_is_error() {
        let err = fetch_openrouter_usage_at(
            "http://127.0.0.1:1/api/v1",
            "sk-or-v1-usage",
            Duration::from_secs(2),
            &reqwest::Client::new(),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            OpenRouterError::Network(_) | OpenRouterError::Timeout(_)
        ));
    }
}
