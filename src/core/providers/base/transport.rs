//! OpenAI-style chat completions transport
//!
//! A plain HTTP implementation of [`StreamTransport`] for models whose `api` is
//! `openai-completions`. It sends whatever headers it is given and does not retry.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use super::sse::{OpenAICompatibleTransformer, UnifiedSSEStream};
use crate::core::providers::openrouter::OpenRouterError;
use crate::core::traits::{EventStream, StreamTransport};
use crate::core::types::{Context, Message, Model, Role, StreamEvent, StreamOptions};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    stream_options: StreamUsageOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct StreamUsageOptions {
    include_usage: bool,
}

impl<'a> From<&'a Message> for ChatMessage<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            role: message.role,
            content: &message.content,
        }
    }
}

/// Streams OpenAI-compatible chat completions over HTTP
#[derive(Debug, Clone, Default)]
pub struct OpenAICompletionsTransport {
    client: Client,
}

impl OpenAICompletionsTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn build_body<'a>(
        model: &'a Model,
        context: &'a Context,
        options: &'a StreamOptions,
    ) -> ChatCompletionRequest<'a> {
        let mut messages = Vec::with_capacity(context.messages.len() + 1);
        if let Some(prompt) = context.system_prompt.as_deref() {
            messages.push(ChatMessage {
                role: Role::System,
                content: prompt,
            });
        }
        messages.extend(context.messages.iter().map(ChatMessage::from));

        ChatCompletionRequest {
            model: &model.id,
            messages,
            stream: true,
            stream_options: StreamUsageOptions {
                include_usage: true,
            },
            max_tokens: Some(options.max_tokens.unwrap_or(model.max_tokens)),
            temperature: options.temperature,
            user: options.session_id.as_deref(),
        }
    }

    /// Model headers first, then option headers, so per-request values win
    fn build_headers(
        model_headers: &HashMap<String, String>,
        options: &StreamOptions,
    ) -> Result<HeaderMap, OpenRouterError> {
        let mut headers = HeaderMap::new();

        if let Some(api_key) = options.api_key.as_deref() {
            let value = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
                OpenRouterError::InvalidRequest(format!("Invalid API key header: {}", e))
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        for (key, value) in model_headers.iter().chain(options.headers.iter()) {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                OpenRouterError::InvalidRequest(format!("Invalid header key '{}': {}", key, e))
            })?;
            let value = HeaderValue::from_str(value.trim()).map_err(|e| {
                OpenRouterError::InvalidRequest(format!("Invalid header value for '{}': {}", key, e))
            })?;
            headers.insert(name, value);
        }

        Ok(headers)
    }
}

#[async_trait]
impl StreamTransport for OpenAICompletionsTransport {
    async fn stream(
        &self,
        model: &Model,
        context: &Context,
        options: StreamOptions,
    ) -> Result<EventStream, OpenRouterError> {
        let url = format!("{}/chat/completions", model.base_url.trim_end_matches('/'));
        let headers = Self::build_headers(&model.headers, &options)?;
        let body = Self::build_body(model, context, &options);

        debug!(
            provider = %model.provider,
            model = %model.id,
            url = %url,
            message_count = body.messages.len(),
            "Sending streaming chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| OpenRouterError::from_reqwest(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(OpenRouterError::from_status(status.as_u16(), &error_text));
        }

        let model_id = model.id.clone();
        let mut events = UnifiedSSEStream::new(
            Box::pin(response.bytes_stream()),
            OpenAICompatibleTransformer,
        );

        let stream = async_stream::stream! {
            yield Ok::<_, OpenRouterError>(StreamEvent::Start { model: model_id });
            while let Some(event) = events.next().await {
                yield event;
            }
        };

        Ok(Box::pin(stream))
    }
}
