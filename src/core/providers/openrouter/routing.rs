//! OpenRouter enablement and provider resolution
//!
//! Routing through OpenRouter is switched on by the presence of a credential. The
//! credential is read through a [`CredentialSource`] on every call, so a key that
//! appears or disappears at runtime is picked up without a restart.

use std::fmt;

use super::config::{API_KEY_ENV, PROVIDER_NAME};
use super::mapping::ModelRoute;
use super::streaming::{
    Attribution, OpenRouterStreamFn, create_openrouter_stream_fn_with_attribution,
};
use crate::core::traits::StreamTransport;

/// Default provider when routing through OpenRouter
pub const DEFAULT_PROVIDER: &str = PROVIDER_NAME;

/// Default model, as an OpenRouter id
pub const DEFAULT_MODEL: &str = "anthropic/claude-opus-4-6";

/// Context window of the default model
pub const DEFAULT_CONTEXT_TOKENS: u32 = 200_000;

/// Reads the raw credential value
pub trait CredentialSource: Send + Sync {
    fn read(&self) -> Option<String>;
}

impl<F> CredentialSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn read(&self) -> Option<String> {
        self()
    }
}

/// Reads the credential from a process environment variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(API_KEY_ENV)
    }
}

impl CredentialSource for EnvCredential {
    fn read(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// Fixed credential value
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredential(Option<String>);

impl StaticCredential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticCredential {
    fn read(&self) -> Option<String> {
        self.0.clone()
    }
}

impl fmt::Debug for StaticCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.0.is_some() { "Some([REDACTED])" } else { "None" };
        f.debug_tuple("StaticCredential").field(&shown).finish()
    }
}

/// Whether inference goes through the aggregator or straight to each provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingMode {
    Aggregated,
    Direct,
}

/// Effective default provider and model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDefaults {
    pub provider: String,
    pub model: String,
}

/// Credential-driven routing decisions
#[derive(Debug, Clone)]
pub struct OpenRouterRouting<C> {
    credential: C,
}

impl OpenRouterRouting<EnvCredential> {
    /// Read the credential from `OPENROUTER_API_KEY`
    pub fn from_env() -> Self {
        Self::new(EnvCredential::default())
    }
}

impl<C: CredentialSource> OpenRouterRouting<C> {
    pub fn new(credential: C) -> Self {
        Self { credential }
    }

    /// Trimmed credential, `None` when unset or blank
    pub fn api_key(&self) -> Option<String> {
        self.credential
            .read()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn mode(&self) -> RoutingMode {
        if self.is_enabled() {
            RoutingMode::Aggregated
        } else {
            RoutingMode::Direct
        }
    }

    /// Default provider and model for the current routing mode.
    ///
    /// Direct mode addresses the default model through its native provider.
    pub fn default_route(&self) -> RoutingDefaults {
        match self.mode() {
            RoutingMode::Aggregated => RoutingDefaults {
                provider: DEFAULT_PROVIDER.to_string(),
                model: DEFAULT_MODEL.to_string(),
            },
            RoutingMode::Direct => {
                let route = ModelRoute::parse(DEFAULT_MODEL);
                RoutingDefaults {
                    provider: route.provider().to_string(),
                    model: route.model_id().to_string(),
                }
            }
        }
    }

    /// Authenticated stream function, `None` when routing is disabled
    pub fn stream_fn<T: StreamTransport>(&self, transport: T) -> Option<OpenRouterStreamFn<T>> {
        self.stream_fn_with_attribution(Attribution::default(), transport)
    }

    pub fn stream_fn_with_attribution<T: StreamTransport>(
        &self,
        attribution: Attribution,
        transport: T,
    ) -> Option<OpenRouterStreamFn<T>> {
        self.api_key()
            .map(|key| create_openrouter_stream_fn_with_attribution(key, attribution, transport))
    }
}

/// Native provider behind a possibly-aggregated `(provider, model_id)` pair.
///
/// Cost and capability lookups use this to find the native pricing table for
/// requests that went through OpenRouter.
pub fn resolve_real_provider(provider: Option<&str>, model_id: Option<&str>) -> String {
    match (provider, model_id) {
        (None, _) => String::new(),
        (Some(provider), _) if provider != PROVIDER_NAME => provider.to_string(),
        (Some(provider), None) => provider.to_string(),
        (Some(provider), Some("")) => provider.to_string(),
        (Some(_), Some(model_id)) => ModelRoute::parse(model_id).provider().to_string(),
    }
}
