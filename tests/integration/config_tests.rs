//! Configuration integration tests

#[cfg(test)]
mod tests {
    use openrouter_routing::{
        CredentialSource, OpenRouterConfig, OpenRouterRouting, RoutingError, StreamOptions,
        create_openrouter_stream_fn_with_attribution,
    };
    use std::io::Write;
    use std::time::Duration;

    use crate::common::RecordingTransport;

    /// Test loading a partial YAML file from disk
    #[tokio::test]
    async fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "site_url: https://example.com").unwrap();
        writeln!(file, "site_name: Example").unwrap();
        writeln!(file, "usage_timeout_ms: 2500").unwrap();

        let config = OpenRouterConfig::from_file(file.path()).await.unwrap();
        assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.api_key_env, "OPENROUTER_API_KEY");
        assert_eq!(config.usage_timeout(), Duration::from_millis(2500));

        let stream_fn = create_openrouter_stream_fn_with_attribution(
            "k",
            config.attribution(),
            RecordingTransport::default(),
        );
        let options = stream_fn.apply_headers(StreamOptions::default());
        assert_eq!(options.header("HTTP-Referer"), Some("https://example.com"));
        assert_eq!(options.header("X-Title"), Some("Example"));
    }

    /// Test that an invalid file is rejected with a provider error
    #[tokio::test]
    async fn test_invalid_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: ftp://openrouter.ai").unwrap();

        let err = OpenRouterConfig::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, RoutingError::Provider(_)));
    }

    /// Test that the configured credential variable is the one routing reads
    #[test]
    fn test_configured_credential_variable() {
        let var = "OPENROUTER_ROUTING_INTEGRATION_NEVER_SET";
        let config = OpenRouterConfig {
            api_key_env: var.to_string(),
            ..Default::default()
        };
        let credential = config.credential();
        assert_eq!(credential.var(), var);
        assert_eq!(credential.read(), None);

        let routing = OpenRouterRouting::new(credential);
        assert!(!routing.is_enabled());
        assert_eq!(routing.api_key(), None);
    }
}
