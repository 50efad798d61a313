use serde::{Deserialize, Serialize};
use std::fmt;

/// Which hosted chat API a model is served by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[serde(rename = "openai")]
    OpenAi,
    Anthropic,
    Mistral,
}

impl ProviderKind {
    /// The lowercase title used in config files and command dispatch.
    pub fn title(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Mistral => "mistral",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A fully resolved model: credentials, limits and pricing.
///
/// Built once before a chat session starts and never changed afterwards.
#[derive(Clone, PartialEq)]
pub struct ModelDescriptor {
    pub api_key: String,
    pub provider: ProviderKind,
    pub model_name: String,
    pub max_tokens: u32,
    /// USD per 1000 prompt tokens.
    pub input_price_per_1k: f64,
    /// USD per 1000 completion tokens.
    pub output_price_per_1k: f64,
    /// Endpoint override; `None` uses the provider's public API.
    pub base_url: Option<String>,
}

impl fmt::Debug for ModelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelDescriptor")
            .field("api_key", &"[REDACTED]")
            .field("provider", &self.provider)
            .field("model_name", &self.model_name)
            .field("max_tokens", &self.max_tokens)
            .field("input_price_per_1k", &self.input_price_per_1k)
            .field("output_price_per_1k", &self.output_price_per_1k)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> ModelDescriptor {
        ModelDescriptor {
            api_key: "sk-secret-value".into(),
            provider: ProviderKind::Anthropic,
            model_name: "claude-sonnet-4-20250514".into(),
            max_tokens: 4096,
            input_price_per_1k: 0.003,
            output_price_per_1k: 0.015,
            base_url: None,
        }
    }

    #[test]
    fn provider_kind_serde_uses_titles() {
        let json = serde_json::to_string(&ProviderKind::OpenAi).unwrap();
        assert_eq!(json, "\"openai\"");
        let parsed: ProviderKind = serde_json::from_str("\"mistral\"").unwrap();
        assert_eq!(parsed, ProviderKind::Mistral);
        let parsed: ProviderKind = serde_json::from_str("\"anthropic\"").unwrap();
        assert_eq!(parsed, ProviderKind::Anthropic);
    }

    #[test]
    fn provider_kind_display_matches_title() {
        assert_eq!(ProviderKind::OpenAi.to_string(), "openai");
        assert_eq!(ProviderKind::Anthropic.to_string(), "anthropic");
        assert_eq!(ProviderKind::Mistral.to_string(), "mistral");
    }

    #[test]
    fn descriptor_debug_redacts_api_key() {
        let debug = format!("{:?}", descriptor());
        assert!(!debug.contains("sk-secret-value"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("claude-sonnet-4-20250514"));
    }
}
