//! Recording transport
//!
//! Captures every request handed to it and replays a fixed event script.

use async_trait::async_trait;
use openrouter_routing::{
    Context, EventStream, Model, OpenRouterError, StreamEvent, StreamOptions, StreamTransport,
};
use std::sync::{Arc, Mutex};

/// One captured `stream` call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: Model,
    pub context: Context,
    pub options: StreamOptions,
}

/// Transport that records calls instead of performing I/O
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    script: Vec<StreamEvent>,
}

impl RecordingTransport {
    /// Replay `script` on every call
    pub fn with_script(script: Vec<StreamEvent>) -> Self {
        Self {
            calls: Arc::default(),
            script,
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StreamTransport for RecordingTransport {
    async fn stream(
        &self,
        model: &Model,
        context: &Context,
        options: StreamOptions,
    ) -> Result<EventStream, OpenRouterError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.clone(),
            context: context.clone(),
            options,
        });
        let events: Vec<Result<StreamEvent, OpenRouterError>> =
            self.script.iter().cloned().map(Ok).collect();
        Ok(Box::pin(futures::stream::iter(events)))
    }
}
