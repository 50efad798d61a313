//! Session collaborators, states, and the working-indicator guard.

use std::path::PathBuf;

use async_trait::async_trait;
use parley_common::{Notification, ProviderKind};

use crate::{AiError, Message};

/// One read from the user's input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Interrupt signal while waiting at the prompt.
    Interrupted,
    /// The input stream ended.
    Closed,
}

/// What the command layer decided about a raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Prompt again without touching the conversation.
    Skip,
    /// End the session.
    Terminate,
    /// Send this text as the user's message.
    Content(String),
}

/// Terminal-side collaborator: input, replies, notices, and the
/// "awaiting response" indicator.
#[async_trait]
pub trait Console: Send {
    async fn read_line(&mut self) -> Input;

    async fn confirm(&mut self, question: &str) -> bool;

    fn start_working(&mut self);

    fn stop_working(&mut self);

    fn show_reply(&mut self, text: &str);

    fn notify(&mut self, notification: Notification);
}

/// Interprets raw input. May touch external state, never the conversation.
pub trait CommandHandler: Send {
    fn dispatch(
        &mut self,
        provider: ProviderKind,
        model_name: &str,
        raw: &str,
        conversation: &[Message],
    ) -> Dispatch;
}

/// Asynchronous cancellation source raced against each remote call.
#[async_trait]
pub trait Interrupt: Send + Sync {
    /// Resolves when the user asks to abandon the in-flight request.
    async fn triggered(&self);
}

/// Persists a finished or abandoned conversation.
pub trait TranscriptStore: Send + Sync {
    fn save(&self, conversation: &[Message]) -> parley_common::Result<PathBuf>;
}

/// The collaborators a session talks to.
pub struct SessionIo {
    pub console: Box<dyn Console>,
    pub commands: Box<dyn CommandHandler>,
    pub interrupt: Box<dyn Interrupt>,
    pub store: std::sync::Arc<dyn TranscriptStore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Dispatching,
    Committing,
    RollingBack,
    Terminated,
}

/// How a single turn ended.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// Input produced no message.
    Skipped,
    /// Reply appended to the conversation.
    Committed,
    /// Provider failure; the user message was rolled back.
    RolledBack(AiError),
    /// Interrupted mid-call; the user message was rolled back.
    Cancelled,
    Terminated,
}

/// Clears the working indicator on drop, so every exit from the remote
/// wait (reply, failure, or interrupt) stops it.
pub(crate) struct WorkingGuard<'a> {
    console: &'a mut dyn Console,
}

impl<'a> WorkingGuard<'a> {
    pub(crate) fn start(console: &'a mut dyn Console) -> Self {
        console.start_working();
        Self { console }
    }
}

impl Drop for WorkingGuard<'_> {
    fn drop(&mut self) {
        self.console.stop_working();
    }
}
