//! ProviderAdapter trait implementation for AnthropicAdapter.

use async_trait::async_trait;
use parley_common::ProviderKind;
use tracing::debug;

use crate::http::post_json;
use crate::{AiError, Message, ProviderAdapter, RemoteTurnResult, Reply, SessionConfig};

use super::client::AnthropicAdapter;

impl AnthropicAdapter {
    async fn request(&self, messages: &[Message], config: &SessionConfig) -> Result<Reply, AiError> {
        let body = self.build_request_body(messages, config)?;
        let headers = self.auth_headers()?;

        debug!(
            model = %self.model.model_name,
            has_system = self.instruction.is_some(),
            "Anthropic API request"
        );

        let json = post_json(&self.http, self.api_url(), headers, &body).await?;
        self.parse_response(&json)
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicAdapter {
    fn provider(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    fn model_name(&self) -> &str {
        &self.model.model_name
    }

    async fn send(&self, conversation: &[Message], config: &SessionConfig) -> RemoteTurnResult {
        self.request(conversation, config).await.into()
    }
}
