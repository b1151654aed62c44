//! Model descriptor types
//!
//! A [`Model`] is owned by the caller's model catalog. The routing layer reads it and
//! produces rewritten copies; it never mutates a descriptor in place.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Wire-format family for OpenAI-style chat completions
pub const OPENAI_COMPLETIONS_API: &str = "openai-completions";

/// Wire-format family for Anthropic messages
pub const ANTHROPIC_MESSAGES_API: &str = "anthropic-messages";

/// A model descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Model ID as understood by `provider`
    pub id: String,
    /// Human readable name
    pub name: String,
    /// Wire-format family tag (e.g. `openai-completions`)
    pub api: String,
    /// Provider tag (e.g. `anthropic`, `openrouter`)
    pub provider: String,
    /// Base endpoint requests are sent to
    pub base_url: String,
    /// Whether the model supports extended reasoning
    #[serde(default)]
    pub reasoning: bool,
    /// Accepted input modalities
    #[serde(default)]
    pub input: Vec<InputType>,
    /// Pricing per million tokens
    #[serde(default)]
    pub cost: ModelCost,
    /// Context window in tokens
    pub context_window: u32,
    /// Maximum output tokens
    pub max_tokens: u32,
    /// Static headers the catalog attaches to every request for this model
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

/// Input types supported by a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Image,
}

/// Model pricing per million tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCost {
    pub input: f64,
    pub output: f64,
    pub cache_read: f64,
    pub cache_write: f64,
}

impl Model {
    /// Calculate cost for the given token counts.
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate_cost(
        &self,
        input: u64,
        output: u64,
        cache_read: u64,
        cache_write: u64,
    ) -> f64 {
        let input_cost = (self.cost.input / 1_000_000.0) * input as f64;
        let output_cost = (self.cost.output / 1_000_000.0) * output as f64;
        let cache_read_cost = (self.cost.cache_read / 1_000_000.0) * cache_read as f64;
        let cache_write_cost = (self.cost.cache_write / 1_000_000.0) * cache_write as f64;
        input_cost + output_cost + cache_read_cost + cache_write_cost
    }

    /// Whether the model accepts image input
    pub fn supports_images(&self) -> bool {
        self.input.contains(&InputType::Image)
    }
}
