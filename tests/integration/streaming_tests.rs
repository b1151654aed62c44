//! Streaming integration tests
//!
//! Runs the authenticated stream function over the HTTP transport against a mock
//! OpenRouter endpoint.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::ModelFactory;
    use futures::StreamExt;
    use openrouter_routing::{
        Context, Message, OpenAICompletionsTransport, OpenRouterError, StreamEvent,
        StreamOptions, StreamTransport, StreamUsage, create_openrouter_model_with_base_url,
        create_openrouter_stream_fn,
    };
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sse_body() -> String {
        [
            r#"data: {"choices":[{"delta":{"reasoning":"thinking"},"finish_reason":null}]}"#,
            r#"data: {"choices":[{"delta":{"content":"Hello"},"finish_reason":null}]}"#,
            r#"data: {"choices":[{"delta":{"content":" world"},"finish_reason":null}]}"#,
            r#"data: {"choices":[{"delta":{},"finish_reason":"stop"}],"usage":{"prompt_tokens":12,"completion_tokens":2}}"#,
            "data: [DONE]",
        ]
        .iter()
        .map(|line| format!("{}\n\n", line))
        .collect()
    }

    /// Test a full authenticated stream against a mock endpoint
    #[tokio::test]
    async fn test_authenticated_stream_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-or-v1-e2e"))
            .and(header("http-referer", "https://openclaw.ai"))
            .and(header("x-title", "OpenClaw"))
            .and(body_partial_json(serde_json::json!({
                "model": "anthropic/claude-opus-4-6",
                "stream": true,
                "messages": [{"role": "user", "content": "hi"}]
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/event-stream")
                    .set_body_string(sse_body()),
            )
            .expect(1)
            .mount(&server)
            .await;

        let base_url = format!("{}/api/v1", server.uri());
        let model =
            create_openrouter_model_with_base_url(&ModelFactory::anthropic_opus(), &base_url);
        let stream_fn =
            create_openrouter_stream_fn("sk-or-v1-e2e", OpenAICompletionsTransport::default());

        let stream = assert_ok!(
            stream_fn
                .stream(
                    &model,
                    &Context::new(vec![Message::user("hi")]),
                    StreamOptions::default()
                )
                .await
        );
        let events: Vec<StreamEvent> = stream.map(Result::unwrap).collect().await;

        assert_eq!(
            events.first(),
            Some(&StreamEvent::Start {
                model: "anthropic/claude-opus-4-6".to_string()
            })
        );
        assert!(events.contains(&StreamEvent::ThinkingDelta {
            text: "thinking".to_string()
        }));

        let text: String = events
            .iter()
            .filter_map(|event| match event {
                StreamEvent::TextDelta { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(text, "Hello world");

        assert!(events.contains(&StreamEvent::Usage(StreamUsage {
            input_tokens: 12,
            output_tokens: 2,
            cache_read_tokens: 0,
        })));
        assert!(events.contains(&StreamEvent::Done {
            finish_reason: Some("stop".to_string())
        }));
    }

    /// Test that a rejected credential surfaces as an authentication error
    #[tokio::test]
    async fn test_rejected_credential() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_string(r#"{"error":{"message":"User not found.","code":401}}"#),
            )
            .mount(&server)
            .await;

        let model =
            create_openrouter_model_with_base_url(&ModelFactory::anthropic_opus(), &server.uri());
        let stream_fn =
            create_openrouter_stream_fn("sk-or-v1-bad", OpenAICompletionsTransport::default());

        let err = stream_fn
            .stream(&model, &Context::default(), StreamOptions::default())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, OpenRouterError::Authentication(_)));
        assert!(!err.is_retryable());
    }

    /// Test that upstream overload is retryable
    #[tokio::test]
    async fn test_server_error_is_retryable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let model =
            create_openrouter_model_with_base_url(&ModelFactory::anthropic_opus(), &server.uri());
        let stream_fn =
            create_openrouter_stream_fn("sk-or-v1-test", OpenAICompletionsTransport::default());

        let err = stream_fn
            .stream(&model, &Context::default(), StreamOptions::default())
            .await
            .err()
            .unwrap();
        assert_eq!(err.http_status(), 503);
        assert!(err.is_retryable());
    }
}
