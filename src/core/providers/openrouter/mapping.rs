//! OpenRouter model identifier mapping
//!
//! OpenRouter addresses models as `"<prefix>/<model>"`, where the prefix names the
//! upstream vendor in OpenRouter's own vocabulary (`mistralai`, `x-ai`, ...). Both
//! directions are total: unknown providers and ids without a slash have defined
//! fallbacks instead of errors.

/// Provider name used when a composite id carries no prefix
pub const UNKNOWN_PROVIDER: &str = "unknown";

/// Native provider name → OpenRouter prefix
pub const PROVIDER_PREFIXES: &[(&str, &str)] = &[
    ("anthropic", "anthropic"),
    ("openai", "openai"),
    ("google", "google"),
    ("google-vertex", "google"),
    ("mistral", "mistralai"),
    ("xai", "x-ai"),
    ("meta", "meta-llama"),
    ("deepseek", "deepseek"),
    ("qwen", "qwen"),
];

/// OpenRouter prefix for a native provider name.
///
/// Lookup is case-insensitive. Unlisted providers map to their own lower-cased name.
pub fn provider_prefix(provider: &str) -> String {
    let provider = provider.to_lowercase();
    PROVIDER_PREFIXES
        .iter()
        .find(|(native, _)| *native == provider)
        .map(|(_, prefix)| (*prefix).to_string())
        .unwrap_or(provider)
}

/// Build the OpenRouter model id for a native `(provider, model_id)` pair.
///
/// `model_id` is passed through verbatim.
pub fn map_to_openrouter_model_id(provider: &str, model_id: &str) -> String {
    format!("{}/{}", provider_prefix(provider), model_id)
}

/// Provider and model recovered from an OpenRouter model id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedModelId {
    pub provider: String,
    pub model_id: String,
}

/// Split an OpenRouter model id on its first `/`.
///
/// Ids without a slash yield provider `"unknown"` and the whole string as model id.
pub fn parse_openrouter_model_id(openrouter_model_id: &str) -> ParsedModelId {
    match openrouter_model_id.split_once('/') {
        Some((provider, model_id)) => ParsedModelId {
            provider: provider.to_string(),
            model_id: model_id.to_string(),
        },
        None => ParsedModelId {
            provider: UNKNOWN_PROVIDER.to_string(),
            model_id: openrouter_model_id.to_string(),
        },
    }
}

/// Borrowed, tagged view of an OpenRouter model id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelRoute<'a> {
    /// `"<provider>/<model_id>"`
    Resolved { provider: &'a str, model_id: &'a str },
    /// No `/` present
    Unknown { model_id: &'a str },
}

impl<'a> ModelRoute<'a> {
    pub fn parse(openrouter_model_id: &'a str) -> Self {
        match openrouter_model_id.split_once('/') {
            Some((provider, model_id)) => Self::Resolved { provider, model_id },
            None => Self::Unknown {
                model_id: openrouter_model_id,
            },
        }
    }

    /// Provider name, `"unknown"` when unresolved
    pub fn provider(&self) -> &'a str {
        match self {
            Self::Resolved { provider, .. } => *provider,
            Self::Unknown { .. } => UNKNOWN_PROVIDER,
        }
    }

    pub fn model_id(&self) -> &'a str {
        match self {
            Self::Resolved { model_id, .. } | Self::Unknown { model_id } => *model_id,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

impl From<ModelRoute<'_>> for ParsedModelId {
    fn from(route: ModelRoute<'_>) -> Self {
        Self {
            provider: route.provider().to_string(),
            model_id: route.model_id().to_string(),
        }
    }
}
