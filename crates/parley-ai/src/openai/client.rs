//! OpenAI adapter struct, request building, and response parsing.

use parley_common::ModelDescriptor;

use crate::http::{build_http_client, parse_chat_completion, role_content_messages};
use crate::{AiError, Message, Reply, SessionConfig};

pub(crate) const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI chat adapter.
pub struct OpenAiAdapter {
    pub(crate) model: ModelDescriptor,
    pub(crate) http: reqwest::Client,
}

impl OpenAiAdapter {
    pub fn new(model: ModelDescriptor) -> Self {
        Self {
            model,
            http: build_http_client(),
        }
    }

    pub(crate) fn api_url(&self) -> &str {
        self.model.base_url.as_deref().unwrap_or(OPENAI_API_URL)
    }

    /// Build the JSON request body for the chat-completions API.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        config: &SessionConfig,
    ) -> Result<serde_json::Value, AiError> {
        if messages.is_empty() {
            return Err(AiError::InvalidRequest("conversation is empty".into()));
        }

        Ok(serde_json::json!({
            "model": self.model.model_name,
            "temperature": config.temperature,
            "messages": role_content_messages(messages),
        }))
    }

    pub(crate) fn parse_response(&self, json: &serde_json::Value) -> Result<Reply, AiError> {
        parse_chat_completion(json)
    }
}
