//! Model descriptor fixtures
//!
//! Factories create complete descriptors the way a model catalog would.

use openrouter_routing::{
    ANTHROPIC_MESSAGES_API, InputType, Model, ModelCost, OPENAI_COMPLETIONS_API,
};
use std::collections::HashMap;

/// Factory for native model descriptors
pub struct ModelFactory;

impl ModelFactory {
    /// Anthropic's flagship model, addressed natively
    pub fn anthropic_opus() -> Model {
        Model {
            id: "claude-opus-4-6".to_string(),
            name: "Claude Opus 4.6".to_string(),
            api: ANTHROPIC_MESSAGES_API.to_string(),
            provider: "anthropic".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            reasoning: true,
            input: vec![InputType::Text, InputType::Image],
            cost: ModelCost {
                input: 15.0,
                output: 75.0,
                cache_read: 1.5,
                cache_write: 18.75,
            },
            context_window: 200_000,
            max_tokens: 32_000,
            headers: HashMap::new(),
        }
    }

    /// A Mistral model, whose OpenRouter prefix differs from its native name
    pub fn mistral_large() -> Model {
        Model {
            id: "mistral-large-latest".to_string(),
            name: "Mistral Large".to_string(),
            api: OPENAI_COMPLETIONS_API.to_string(),
            provider: "mistral".to_string(),
            base_url: "https://api.mistral.ai/v1".to_string(),
            reasoning: false,
            input: vec![InputType::Text],
            cost: ModelCost {
                input: 2.0,
                output: 6.0,
                ..Default::default()
            },
            context_window: 128_000,
            max_tokens: 8_192,
            headers: HashMap::from([("X-Catalog".to_string(), "native".to_string())]),
        }
    }

    /// A provider OpenRouter has no special prefix for
    pub fn custom(provider: &str, id: &str) -> Model {
        Model {
            id: id.to_string(),
            name: id.to_string(),
            api: OPENAI_COMPLETIONS_API.to_string(),
            provider: provider.to_string(),
            base_url: "http://localhost:8080/v1".to_string(),
            reasoning: false,
            input: vec![InputType::Text],
            cost: ModelCost::default(),
            context_window: 32_000,
            max_tokens: 4_096,
            headers: HashMap::new(),
        }
    }
}
