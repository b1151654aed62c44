//! Unified SSE (Server-Sent Events) Parser
//!
//! Splits a byte stream into SSE events and hands each `data` payload to a
//! provider-specific transformer that turns it into [`StreamEvent`]s.

use bytes::Bytes;
use futures::Stream;
use serde_json::Value;
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::core::providers::openrouter::OpenRouterError;
use crate::core::types::{StreamEvent, StreamUsage};

/// Parsed SSE Event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SSEEvent {
    pub event_type: Option<String>,
    pub data: String,
    pub id: Option<String>,
}

impl SSEEvent {
    /// Parse SSE event from a line
    pub fn from_line(line: &str) -> Option<Self> {
        if line.is_empty() || line.starts_with(':') {
            return None;
        }

        let (field, value) = line.split_once(':')?;
        let value = value.strip_prefix(' ').unwrap_or(value);

        match field {
            "data" => Some(SSEEvent {
                data: value.to_string(),
                ..Default::default()
            }),
            "event" => Some(SSEEvent {
                event_type: Some(value.to_string()),
                ..Default::default()
            }),
            "id" => Some(SSEEvent {
                id: Some(value.to_string()),
                ..Default::default()
            }),
            _ => None,
        }
    }
}

/// Trait for provider-specific SSE transformation
pub trait SSETransformer: Send + Sync {
    /// Check if this is the end-of-stream marker
    fn is_end_marker(&self, data: &str) -> bool {
        data.trim() == "[DONE]"
    }

    /// Transform one SSE `data` payload into stream events
    fn transform_chunk(&self, data: &str) -> Result<Vec<StreamEvent>, OpenRouterError>;
}

/// Longest line the parser buffers while waiting for its newline
pub const MAX_LINE_BYTES: usize = 1024 * 1024;

/// Unified SSE Parser
pub struct UnifiedSSEParser<T: SSETransformer> {
    transformer: T,
    buffer: Vec<u8>,
    current_event: Option<SSEEvent>,
    finished: bool,
}

impl<T: SSETransformer> UnifiedSSEParser<T> {
    pub fn new(transformer: T) -> Self {
        Self {
            transformer,
            buffer: Vec::new(),
            current_event: None,
            finished: false,
        }
    }

    /// Whether the end marker has been seen
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Process raw bytes into stream events.
    ///
    /// Incomplete lines stay buffered as bytes, so a UTF-8 sequence split across
    /// chunks is decoded once it is whole.
    pub fn process_bytes(&mut self, bytes: &[u8]) -> Result<Vec<StreamEvent>, OpenRouterError> {
        self.buffer.extend_from_slice(bytes);

        let mut events = Vec::new();
        let Some(pos) = self.buffer.iter().rposition(|&b| b == b'\n') else {
            return self.check_buffered_line().map(|_| events);
        };

        let complete_part: Vec<u8> = self.buffer.drain(..=pos).collect();
        self.check_buffered_line()?;

        for line in String::from_utf8_lossy(&complete_part).lines() {
            if self.finished {
                break;
            }
            events.extend(self.process_line(line)?);
        }

        Ok(events)
    }

    /// Flush a trailing event that was not terminated by a blank line
    pub fn finish(&mut self) -> Result<Vec<StreamEvent>, OpenRouterError> {
        let rest = std::mem::take(&mut self.buffer);
        let mut events = Vec::new();
        for line in String::from_utf8_lossy(&rest).lines() {
            events.extend(self.process_line(line)?);
        }
        if let Some(event) = self.current_event.take() {
            events.extend(self.process_event(event)?);
        }
        Ok(events)
    }

    fn check_buffered_line(&mut self) -> Result<(), OpenRouterError> {
        if self.buffer.len() > MAX_LINE_BYTES {
            let len = self.buffer.len();
            self.buffer.clear();
            return Err(OpenRouterError::Parsing(format!(
                "SSE line exceeds {} bytes without a newline ({} buffered)",
                MAX_LINE_BYTES, len
            )));
        }
        Ok(())
    }

    fn process_line(&mut self, line: &str) -> Result<Vec<StreamEvent>, OpenRouterError> {
        // Empty line signals end of event
        if line.is_empty() {
            return match self.current_event.take() {
                Some(event) => self.process_event(event),
                None => Ok(Vec::new()),
            };
        }

        if let Some(event) = SSEEvent::from_line(line) {
            let current = self.current_event.get_or_insert_with(SSEEvent::default);
            if !event.data.is_empty() {
                if !current.data.is_empty() {
                    current.data.push('\n');
                }
                current.data.push_str(&event.data);
            }
            if event.event_type.is_some() {
                current.event_type = event.event_type;
            }
            if event.id.is_some() {
                current.id = event.id;
            }
        }

        Ok(Vec::new())
    }

    fn process_event(&mut self, event: SSEEvent) -> Result<Vec<StreamEvent>, OpenRouterError> {
        if event.data.is_empty() || self.finished {
            return Ok(Vec::new());
        }

        if self.transformer.is_end_marker(&event.data) {
            self.finished = true;
            return Ok(Vec::new());
        }

        self.transformer.transform_chunk(&event.data)
    }
}

/// Streaming wrapper that drives a [`UnifiedSSEParser`] over a byte stream
pub struct UnifiedSSEStream<S, T>
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + Unpin,
    T: SSETransformer,
{
    inner: S,
    parser: UnifiedSSEParser<T>,
    event_buffer: VecDeque<StreamEvent>,
    done: bool,
}

impl<S, T> UnifiedSSEStream<S, T>
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + Unpin,
    T: SSETransformer,
{
    pub fn new(stream: S, transformer: T) -> Self {
        Self {
            inner: stream,
            parser: UnifiedSSEParser::new(transformer),
            event_buffer: VecDeque::new(),
            done: false,
        }
    }
}

impl<S, T> Stream for UnifiedSSEStream<S, T>
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + Unpin,
    T: SSETransformer + Unpin,
{
    type Item = Result<StreamEvent, OpenRouterError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            if let Some(event) = this.event_buffer.pop_front() {
                return Poll::Ready(Some(Ok(event)));
            }

            if this.done || this.parser.is_finished() {
                return Poll::Ready(None);
            }

            match Pin::new(&mut this.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => match this.parser.process_bytes(&bytes) {
                    Ok(events) => this.event_buffer.extend(events),
                    Err(e) => {
                        this.done = true;
                        return Poll::Ready(Some(Err(e)));
                    }
                },
                Poll::Ready(Some(Err(e))) => {
                    this.done = true;
                    return Poll::Ready(Some(Err(OpenRouterError::Network(format!(
                        "Stream error: {}",
                        e
                    )))));
                }
                Poll::Ready(None) => {
                    this.done = true;
                    match this.parser.finish() {
                        Ok(events) => this.event_buffer.extend(events),
                        Err(e) => return Poll::Ready(Some(Err(e))),
                    }
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// OpenAI-compatible chat completion chunk transformer
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAICompatibleTransformer;

impl SSETransformer for OpenAICompatibleTransformer {
    fn transform_chunk(&self, data: &str) -> Result<Vec<StreamEvent>, OpenRouterError> {
        let json: Value = serde_json::from_str(data)
            .map_err(|e| OpenRouterError::Parsing(format!("Failed to parse SSE JSON: {}", e)))?;

        // OpenRouter reports mid-stream upstream failures as an `error` object
        if let Some(error) = json.get("error") {
            let status_code = error
                .get("code")
                .and_then(Value::as_u64)
                .and_then(|c| u16::try_from(c).ok())
                .unwrap_or(500);
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string();
            return Err(OpenRouterError::ApiError {
                status_code,
                message,
            });
        }

        let mut events = Vec::new();

        if let Some(choice) = json
            .get("choices")
            .and_then(Value::as_array)
            .and_then(|choices| choices.first())
        {
            let delta = choice.get("delta");
            let text_field = |name: &str| {
                delta
                    .and_then(|d| d.get(name))
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            };

            if let Some(text) = text_field("reasoning").or_else(|| text_field("reasoning_content")) {
                events.push(StreamEvent::ThinkingDelta { text });
            }
            if let Some(text) = text_field("content") {
                events.push(StreamEvent::TextDelta { text });
            }
            if let Some(reason) = choice.get("finish_reason").and_then(Value::as_str) {
                events.push(StreamEvent::Done {
                    finish_reason: Some(reason.to_string()),
                });
            }
        }

        if let Some(usage) = json.get("usage").filter(|u| u.is_object()) {
            let field = |name: &str| usage.get(name).and_then(Value::as_u64).unwrap_or(0);
            let cache_read_tokens = usage
                .get("prompt_tokens_details")
                .and_then(|d| d.get("cached_tokens"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            events.push(StreamEvent::Usage(StreamUsage {
                input_tokens: field("prompt_tokens"),
                output_tokens: field("completion_tokens"),
                cache_read_tokens,
            }));
        }

        Ok(events)
    }
}
