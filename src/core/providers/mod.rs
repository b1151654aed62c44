//! Provider implementations
//!
//! `openrouter` holds the routing core; `base` holds the shared SSE parser and the
//! reference OpenAI-compatible transport.

// Base infrastructure
pub mod base;

// Provider modules
pub mod openrouter;

pub use base::OpenAICompletionsTransport;
pub use openrouter::{OpenRouterConfig, OpenRouterError, OpenRouterRouting};
