//! ProviderAdapter trait implementation for OpenAiAdapter.

use async_trait::async_trait;
use parley_common::ProviderKind;
use tracing::debug;

use crate::http::{bearer_headers, post_json};
use crate::{AiError, Message, ProviderAdapter, RemoteTurnResult, Reply, SessionConfig};

use super::client::OpenAiAdapter;

impl OpenAiAdapter {
    async fn request(&self, messages: &[Message], config: &SessionConfig) -> Result<Reply, AiError> {
        let body = self.build_request_body(messages, config)?;
        let headers = bearer_headers(&self.model.api_key)?;

        debug!(model = %self.model.model_name, messages = messages.len(), "OpenAI API request");

        let json = post_json(&self.http, self.api_url(), headers, &body).await?;
        self.parse_response(&json)
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn provider(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn model_name(&self) -> &str {
        &self.model.model_name
    }

    async fn send(&self, conversation: &[Message], config: &SessionConfig) -> RemoteTurnResult {
        self.request(conversation, config).await.into()
    }
}
