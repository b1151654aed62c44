//! OpenRouter routing
//!
//! OpenRouter is a unified API in front of many LLM providers. This module maps
//! native model identities onto OpenRouter's `"<prefix>/<model>"` scheme, re-targets
//! model descriptors, authenticates streaming requests and normalizes account usage.
//!
//! Documentation: https://openrouter.ai/docs

pub mod config;
pub mod error;
pub mod mapping;
pub mod routing;
pub mod streaming;
pub mod transformer;
pub mod usage;

pub use config::{DEFAULT_BASE_URL, DISPLAY_NAME, OpenRouterConfig, PROVIDER_NAME};
pub use error::OpenRouterError;
pub use mapping::{
    ModelRoute, PROVIDER_PREFIXES, ParsedModelId, map_to_openrouter_model_id,
    parse_openrouter_model_id, provider_prefix,
};
pub use routing::{
    CredentialSource, DEFAULT_CONTEXT_TOKENS, DEFAULT_MODEL, DEFAULT_PROVIDER, EnvCredential,
    OpenRouterRouting, RoutingDefaults, RoutingMode, StaticCredential, resolve_real_provider,
};
pub use streaming::{
    Attribution, OpenRouterStreamFn, create_openrouter_stream_fn,
    create_openrouter_stream_fn_with_attribution,
};
pub use transformer::{create_openrouter_model, create_openrouter_model_with_base_url};
pub use usage::{fetch_openrouter_usage, fetch_openrouter_usage_at, normalize_key_info};
