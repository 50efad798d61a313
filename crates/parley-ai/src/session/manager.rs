//! ChatSession struct, construction, and accessors.

use parley_common::ModelDescriptor;
use tracing::debug;

use crate::token_tracker::TokenTracker;
use crate::{connect, Conversation, Message, ProviderAdapter, SessionConfig};

use super::types::{SessionIo, SessionState};

/// One interactive chat with a single model.
pub struct ChatSession {
    pub(super) adapter: Box<dyn ProviderAdapter>,
    pub(super) model: ModelDescriptor,
    pub(super) config: SessionConfig,
    pub(super) conversation: Conversation,
    pub(super) tracker: TokenTracker,
    pub(super) state: SessionState,
    pub(super) io: SessionIo,
}

impl ChatSession {
    /// Start a session against the provider named by `model`, seeding the
    /// conversation from `transcript`.
    pub fn start(
        model: ModelDescriptor,
        config: SessionConfig,
        transcript: Vec<Message>,
        io: SessionIo,
    ) -> Self {
        let (adapter, conversation) = connect(model.clone(), transcript);
        Self::with_adapter(adapter, model, config, conversation, io)
    }

    /// Start a session with an already-built adapter.
    pub fn with_adapter(
        adapter: Box<dyn ProviderAdapter>,
        model: ModelDescriptor,
        config: SessionConfig,
        conversation: Conversation,
        io: SessionIo,
    ) -> Self {
        debug!(
            provider = %adapter.provider(),
            model = %adapter.model_name(),
            temperature = config.temperature,
            seeded = conversation.len(),
            "chat session created"
        );
        Self {
            adapter,
            model,
            config,
            conversation,
            tracker: TokenTracker::new(),
            state: SessionState::AwaitingInput,
            io,
        }
    }

    pub(super) fn transition(&mut self, next: SessionState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "session state");
            self.state = next;
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }
}
