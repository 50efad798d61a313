//! Chat engine for Parley.
//!
//! Provides OpenAI, Anthropic and Mistral chat adapters behind one
//! [`ProviderAdapter`] trait, plus:
//! - The [`Conversation`] transcript with single-step rollback
//! - The [`ChatSession`] loop that commits or rolls back each turn
//! - Token usage and cost tracking

pub mod adapter;
pub mod anthropic;
pub mod conversation;
mod http;
pub mod mistral;
pub mod openai;
pub mod session;
pub mod token_tracker;

pub use adapter::{connect, ProviderAdapter};
pub use anthropic::AnthropicAdapter;
pub use conversation::Conversation;
pub use mistral::MistralAdapter;
pub use openai::OpenAiAdapter;
pub use session::{
    ChatSession, CommandHandler, Console, Dispatch, Input, Interrupt, SessionIo, SessionState,
    TranscriptStore, TurnOutcome,
};
pub use token_tracker::TokenTracker;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Per-session sampling settings, on the OpenAI temperature scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub temperature: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { temperature: 1.0 }
    }
}

/// A normalized successful completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Outcome of one remote call, already normalized by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteTurnResult {
    Success(Reply),
    Failure(AiError),
}

impl From<Result<Reply, AiError>> for RemoteTurnResult {
    fn from(result: Result<Reply, AiError>) -> Self {
        match result {
            Ok(reply) => Self::Success(reply),
            Err(err) => Self::Failure(err),
        }
    }
}

/// Classified provider failures. None of these are fatal to a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("the server could not be reached: {0}")]
    Connection(String),
    #[error("rate limited (HTTP 429), back off a bit: {0}")]
    RateLimited(String),
    #[error("server returned {}: {body}", status_label(.status))]
    ServerStatus { status: Option<u16>, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("HTTP {code}"),
        None => "an unclassified error".to_string(),
    }
}
