//! Streaming transport abstraction
//!
//! The routing layer never talks to a chat endpoint itself. It shapes the model,
//! context and options, then hands them to a [`StreamTransport`].

use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;
use std::sync::Arc;

use crate::core::providers::openrouter::OpenRouterError;
use crate::core::types::{Context, Model, StreamEvent, StreamOptions};

/// Boxed stream of completion events
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, OpenRouterError>> + Send>>;

/// "Send a chat request, receive a stream of events"
///
/// Cancellation is the transport's concern: dropping the returned stream must
/// abort the underlying request.
#[async_trait]
pub trait StreamTransport: Send + Sync {
    async fn stream(
        &self,
        model: &Model,
        context: &Context,
        options: StreamOptions,
    ) -> Result<EventStream, OpenRouterError>;
}

#[async_trait]
impl<T: StreamTransport + ?Sized> StreamTransport for Arc<T> {
    async fn stream(
        &self,
        model: &Model,
        context: &Context,
        options: StreamOptions,
    ) -> Result<EventStream, OpenRouterError> {
        (**self).stream(model, context, options).await
    }
}
