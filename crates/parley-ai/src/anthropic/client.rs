//! Anthropic adapter struct, request building, and response parsing.

use parley_common::ModelDescriptor;
use reqwest::header::HeaderMap;

use crate::http::build_http_client;
use crate::{AiError, Message, Reply, Role, SessionConfig, TokenUsage};

pub(crate) const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub(crate) const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic chat adapter.
pub struct AnthropicAdapter {
    pub(crate) model: ModelDescriptor,
    pub(crate) instruction: Option<String>,
    pub(crate) http: reqwest::Client,
}

impl AnthropicAdapter {
    pub fn new(model: ModelDescriptor, instruction: Option<String>) -> Self {
        Self {
            model,
            instruction,
            http: build_http_client(),
        }
    }

    /// Take the first transcript entry as the system instruction and return
    /// the remaining messages for the session to own.
    pub fn from_transcript(model: ModelDescriptor, transcript: Vec<Message>) -> (Self, Vec<Message>) {
        let mut rest = transcript.into_iter();
        let instruction = rest.next().map(|first| first.content);
        (Self::new(model, instruction), rest.collect())
    }

    #[cfg(test)]
    pub(crate) fn instruction(&self) -> Option<&str> {
        self.instruction.as_deref()
    }

    pub(crate) fn api_url(&self) -> &str {
        self.model.base_url.as_deref().unwrap_or(ANTHROPIC_API_URL)
    }

    pub(crate) fn auth_headers(&self) -> Result<HeaderMap, AiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            self.model
                .api_key
                .parse()
                .map_err(|_| AiError::InvalidRequest("API key is not a valid header value".into()))?,
        );
        headers.insert(
            "anthropic-version",
            reqwest::header::HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        Ok(headers)
    }

    /// Build the JSON request body for the Messages API.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        config: &SessionConfig,
    ) -> Result<serde_json::Value, AiError> {
        let mut msgs = Vec::new();
        for msg in messages {
            let role = match msg.role {
                Role::User => "user",
                Role::Assistant => "assistant",
                Role::System => continue, // only the top-level field carries instructions
            };
            msgs.push(serde_json::json!({
                "role": role,
                "content": msg.content,
            }));
        }

        if msgs.is_empty() {
            return Err(AiError::InvalidRequest("conversation is empty".into()));
        }

        let mut body = serde_json::json!({
            "model": self.model.model_name,
            "max_tokens": self.model.max_tokens,
            "temperature": config.temperature / 2.0,
            "messages": msgs,
        });

        if let Some(ref system) = self.instruction {
            body["system"] = serde_json::json!(system);
        }

        Ok(body)
    }

    /// Reply text is the first content block's text.
    pub(crate) fn parse_response(&self, json: &serde_json::Value) -> Result<Reply, AiError> {
        let first = json["content"]
            .as_array()
            .and_then(|blocks| blocks.first())
            .ok_or_else(|| AiError::MalformedResponse("no content blocks in response".into()))?;

        let text = first["text"].as_str().ok_or_else(|| {
            AiError::MalformedResponse(format!(
                "first content block is {}, not text",
                first["type"].as_str().unwrap_or("untyped")
            ))
        })?;

        let usage = TokenUsage {
            input_tokens: json["usage"]["input_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["output_tokens"].as_u64().unwrap_or(0),
        };

        Ok(Reply {
            text: text.to_string(),
            usage,
        })
    }
}
