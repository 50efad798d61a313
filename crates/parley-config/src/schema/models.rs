//! Model catalogue entries.

use parley_common::ProviderKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One selectable model as written in the config file.
///
/// The API key comes from `api_key` when set, otherwise from the
/// environment variable named by `api_key_env`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelEntry {
    pub provider: ProviderKind,
    pub model_name: String,
    pub api_key: Option<String>,
    pub api_key_env: Option<String>,
    pub max_tokens: u32,
    pub input_price_per_1k: f64,
    pub output_price_per_1k: f64,
    pub base_url: Option<String>,
}

impl std::fmt::Debug for ModelEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelEntry")
            .field("provider", &self.provider)
            .field("model_name", &self.model_name)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_key_env", &self.api_key_env)
            .field("max_tokens", &self.max_tokens)
            .field("input_price_per_1k", &self.input_price_per_1k)
            .field("output_price_per_1k", &self.output_price_per_1k)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for ModelEntry {
    fn default() -> Self {
        Self {
            provider: ProviderKind::OpenAi,
            model_name: String::new(),
            api_key: None,
            api_key_env: None,
            max_tokens: 4096,
            input_price_per_1k: 0.0,
            output_price_per_1k: 0.0,
            base_url: None,
        }
    }
}

impl ModelEntry {
    fn builtin(
        provider: ProviderKind,
        model_name: &str,
        env: &str,
        max_tokens: u32,
        input_price_per_1k: f64,
        output_price_per_1k: f64,
    ) -> Self {
        Self {
            provider,
            model_name: model_name.into(),
            api_key: None,
            api_key_env: Some(env.into()),
            max_tokens,
            input_price_per_1k,
            output_price_per_1k,
            base_url: None,
        }
    }
}

/// Models available when the config file declares none.
pub fn default_models() -> BTreeMap<String, ModelEntry> {
    let mut models = BTreeMap::new();
    models.insert(
        "gpt-4o".into(),
        ModelEntry::builtin(ProviderKind::OpenAi, "gpt-4o", "OPENAI_API_KEY", 4096, 0.005, 0.015),
    );
    models.insert(
        "claude-sonnet".into(),
        ModelEntry::builtin(
            ProviderKind::Anthropic,
            "claude-sonnet-4-20250514",
            "ANTHROPIC_API_KEY",
            4096,
            0.003,
            0.015,
        ),
    );
    models.insert(
        "mistral-large".into(),
        ModelEntry::builtin(
            ProviderKind::Mistral,
            "mistral-large-latest",
            "MISTRAL_API_KEY",
            4096,
            0.002,
            0.006,
        ),
    );
    models
}
