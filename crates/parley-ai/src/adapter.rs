//! The provider-neutral adapter seam and session-start construction.

use async_trait::async_trait;
use parley_common::{ModelDescriptor, ProviderKind};
use tracing::debug;

use crate::{
    AnthropicAdapter, Conversation, Message, MistralAdapter, OpenAiAdapter, RemoteTurnResult,
    SessionConfig,
};

/// One hosted chat API. Implementations shape requests for their provider
/// and normalize every outcome, including failures, into a
/// [`RemoteTurnResult`]; nothing is raised past this boundary.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn provider(&self) -> ProviderKind;

    fn model_name(&self) -> &str;

    async fn send(&self, conversation: &[Message], config: &SessionConfig) -> RemoteTurnResult;
}

/// Build the adapter for `model` and the transcript the session will own.
///
/// Anthropic takes the first transcript entry as its system instruction,
/// so that entry is removed from the returned conversation. The other
/// providers keep the transcript untouched.
pub fn connect(
    model: ModelDescriptor,
    transcript: Vec<Message>,
) -> (Box<dyn ProviderAdapter>, Conversation) {
    debug!(provider = %model.provider, model = %model.model_name, "connecting adapter");
    match model.provider {
        ProviderKind::OpenAi => (Box::new(OpenAiAdapter::new(model)), transcript.into()),
        ProviderKind::Mistral => (Box::new(MistralAdapter::new(model)), transcript.into()),
        ProviderKind::Anthropic => {
            let (adapter, rest) = AnthropicAdapter::from_transcript(model, transcript);
            (Box::new(adapter), rest.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(provider: ProviderKind) -> ModelDescriptor {
        ModelDescriptor {
            api_key: "key".into(),
            provider,
            model_name: format!("{provider}-model"),
            max_tokens: 1024,
            input_price_per_1k: 0.0,
            output_price_per_1k: 0.0,
            base_url: None,
        }
    }

    fn opening() -> Vec<Message> {
        vec![Message::system("You are terse.")]
    }

    #[test]
    fn openai_keeps_system_message_in_transcript() {
        let (adapter, conversation) = connect(model(ProviderKind::OpenAi), opening());
        assert_eq!(adapter.provider(), ProviderKind::OpenAi);
        assert_eq!(adapter.model_name(), "openai-model");
        assert_eq!(conversation.messages(), opening().as_slice());
    }

    #[test]
    fn mistral_keeps_transcript_and_filters_per_request() {
        let (adapter, conversation) = connect(model(ProviderKind::Mistral), opening());
        assert_eq!(adapter.provider(), ProviderKind::Mistral);
        assert_eq!(conversation.len(), 1);
    }

    #[test]
    fn anthropic_moves_first_entry_out_of_transcript() {
        let (adapter, conversation) = connect(model(ProviderKind::Anthropic), opening());
        assert_eq!(adapter.provider(), ProviderKind::Anthropic);
        assert!(conversation.is_empty());
    }
}
