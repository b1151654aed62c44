//! OpenRouter model descriptor transformer
//!
//! OpenRouter is OpenAI compatible, so any native descriptor can be re-targeted at it
//! by rewriting four fields. Capability, cost and context metadata stay untouched.

use tracing::debug;

use super::config::{DEFAULT_BASE_URL, PROVIDER_NAME};
use super::mapping::map_to_openrouter_model_id;
use crate::core::types::{Model, OPENAI_COMPLETIONS_API};

/// Re-target a native model descriptor at OpenRouter.
///
/// Descriptors already tagged `openrouter` keep their id.
pub fn create_openrouter_model(model: &Model) -> Model {
    create_openrouter_model_with_base_url(model, DEFAULT_BASE_URL)
}

/// Same as [`create_openrouter_model`] with a custom endpoint
pub fn create_openrouter_model_with_base_url(model: &Model, base_url: &str) -> Model {
    let id = if model.provider == PROVIDER_NAME {
        model.id.clone()
    } else {
        map_to_openrouter_model_id(&model.provider, &model.id)
    };

    debug!(
        provider = PROVIDER_NAME,
        native_provider = %model.provider,
        native_model = %model.id,
        model = %id,
        "Routing model through OpenRouter"
    );

    Model {
        id,
        api: OPENAI_COMPLETIONS_API.to_string(),
        base_url: base_url.to_string(),
        provider: PROVIDER_NAME.to_string(),
        ..model.clone()
    }
}
