//! # OpenRouter Routing
//!
//! Route LLM model traffic through [OpenRouter](https://openrouter.ai), a unified
//! API in front of many upstream providers.
//!
//! ## Features
//!
//! - **Model id mapping**: native `(provider, model)` pairs to OpenRouter's
//!   `"<prefix>/<model>"` ids and back
//! - **Descriptor rewriting**: re-target any model descriptor at OpenRouter's
//!   OpenAI-compatible endpoint
//! - **Authenticated streaming**: wrap any transport so every request carries the
//!   bearer credential and attribution headers
//! - **Credential-driven enablement**: routing switches on when `OPENROUTER_API_KEY`
//!   is set, re-read on every call
//! - **Usage snapshots**: normalize OpenRouter key usage into a provider-neutral shape
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use openrouter_routing::{
//!     Context, Message, OpenAICompletionsTransport, OpenRouterRouting, StreamOptions,
//!     StreamTransport, create_openrouter_model,
//! };
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let routing = OpenRouterRouting::from_env();
//!     let Some(stream_fn) = routing.stream_fn(OpenAICompletionsTransport::default()) else {
//!         println!("OPENROUTER_API_KEY not set, using providers directly");
//!         return Ok(());
//!     };
//!
//!     let native: openrouter_routing::Model = serde_json::from_str(
//!         r#"{"id":"claude-opus-4-6","name":"Claude Opus 4.6","api":"anthropic-messages",
//!            "provider":"anthropic","baseUrl":"https://api.anthropic.com",
//!            "contextWindow":200000,"maxTokens":32000}"#,
//!     )?;
//!     let model = create_openrouter_model(&native);
//!     let context = Context::new(vec![Message::user("Hello!")]);
//!     let mut events = stream_fn.stream(&model, &context, StreamOptions::default()).await?;
//!     while let Some(event) = events.next().await {
//!         println!("{:?}", event?);
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod utils;

// Export core types
pub use core::types::{
    ANTHROPIC_MESSAGES_API, Context, InputType, Message, Model, ModelCost,
    OPENAI_COMPLETIONS_API, Role, StreamEvent, StreamOptions, StreamUsage, UsageSnapshot,
    UsageWindow,
};

// Export the transport seam
pub use core::traits::{EventStream, StreamTransport};

// Export providers
pub use core::providers::base::OpenAICompletionsTransport;
pub use core::providers::openrouter::{
    Attribution, CredentialSource, DEFAULT_CONTEXT_TOKENS, DEFAULT_MODEL, DEFAULT_PROVIDER,
    EnvCredential, ModelRoute, OpenRouterConfig, OpenRouterError, OpenRouterRouting,
    OpenRouterStreamFn, PROVIDER_PREFIXES, ParsedModelId, RoutingDefaults, RoutingMode,
    StaticCredential, create_openrouter_model, create_openrouter_model_with_base_url,
    create_openrouter_stream_fn, create_openrouter_stream_fn_with_attribution,
    fetch_openrouter_usage, fetch_openrouter_usage_at, map_to_openrouter_model_id,
    normalize_key_info, parse_openrouter_model_id, provider_prefix, resolve_real_provider,
};

// Export utilities
pub use utils::error::{Result, RoutingError};
pub use utils::logging::{LoggingConfig, init_logging};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
