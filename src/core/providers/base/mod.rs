//! Base transport components
//!
//! Contains base components shared by provider transports

pub mod sse;
pub mod transport;

pub use sse::{
    OpenAICompatibleTransformer, SSEEvent, SSETransformer, UnifiedSSEParser, UnifiedSSEStream,
};
pub use transport::OpenAICompletionsTransport;
