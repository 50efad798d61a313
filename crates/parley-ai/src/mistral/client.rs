//! Mistral adapter struct, request building, and response parsing.

use parley_common::ModelDescriptor;

use crate::http::{build_http_client, parse_chat_completion, role_content_messages, without_system};
use crate::{AiError, Message, Reply, SessionConfig};

pub(crate) const MISTRAL_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";

/// Mistral chat adapter.
pub struct MistralAdapter {
    pub(crate) model: ModelDescriptor,
    pub(crate) http: reqwest::Client,
}

impl MistralAdapter {
    pub fn new(model: ModelDescriptor) -> Self {
        Self {
            model,
            http: build_http_client(),
        }
    }

    pub(crate) fn api_url(&self) -> &str {
        self.model.base_url.as_deref().unwrap_or(MISTRAL_API_URL)
    }

    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        config: &SessionConfig,
    ) -> Result<serde_json::Value, AiError> {
        let msgs = role_content_messages(without_system(messages));
        if msgs.is_empty() {
            return Err(AiError::InvalidRequest(
                "conversation has no user or assistant messages".into(),
            ));
        }

        Ok(serde_json::json!({
            "model": self.model.model_name,
            "temperature": config.temperature / 2.0,
            "messages": msgs,
        }))
    }

    pub(crate) fn parse_response(&self, json: &serde_json::Value) -> Result<Reply, AiError> {
        parse_chat_completion(json)
    }
}
