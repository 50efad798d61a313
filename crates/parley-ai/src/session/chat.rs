//! The turn protocol: input, dispatch, remote call, commit or rollback.

use parley_common::Notification;
use tracing::{debug, info, warn};

use crate::{Message, RemoteTurnResult};

use super::manager::ChatSession;
use super::types::{Dispatch, Input, SessionState, TurnOutcome, WorkingGuard};

/// How much of a lost message is quoted back to the user.
const LOST_PREVIEW_CHARS: usize = 60;

impl ChatSession {
    /// Run turns until the user exits or the input stream ends, then report
    /// token usage.
    pub async fn run(&mut self) {
        info!(model = %self.adapter.model_name(), "chat session started");
        while self.turn().await != TurnOutcome::Terminated {}
        self.report_usage();
        info!(turns = self.tracker.call_count(), "chat session ended");
    }

    /// Drive a single turn and return to `AwaitingInput` (or `Terminated`).
    pub async fn turn(&mut self) -> TurnOutcome {
        if self.state == SessionState::Terminated {
            return TurnOutcome::Terminated;
        }
        self.transition(SessionState::AwaitingInput);

        let raw = match self.io.console.read_line().await {
            Input::Line(line) => line,
            Input::Interrupted | Input::Closed => {
                self.offer_save().await;
                self.transition(SessionState::Terminated);
                return TurnOutcome::Terminated;
            }
        };

        self.transition(SessionState::Dispatching);
        let content = match self.io.commands.dispatch(
            self.adapter.provider(),
            self.adapter.model_name(),
            &raw,
            self.conversation.messages(),
        ) {
            Dispatch::Skip => {
                self.transition(SessionState::AwaitingInput);
                return TurnOutcome::Skipped;
            }
            Dispatch::Terminate => {
                self.transition(SessionState::Terminated);
                return TurnOutcome::Terminated;
            }
            Dispatch::Content(content) => content,
        };

        self.conversation.append(Message::user(content));
        let snapshot = self.conversation.snapshot();

        let result = {
            let _working = WorkingGuard::start(self.io.console.as_mut());
            tokio::select! {
                result = self.adapter.send(&snapshot, &self.config) => Some(result),
                () = self.io.interrupt.triggered() => None,
            }
        };

        let outcome = match result {
            Some(RemoteTurnResult::Success(reply)) => {
                self.transition(SessionState::Committing);
                self.tracker.record(&reply.usage);
                self.conversation.append(Message::assistant(reply.text.as_str()));
                self.io.console.show_reply(&reply.text);
                TurnOutcome::Committed
            }
            Some(RemoteTurnResult::Failure(err)) => {
                self.transition(SessionState::RollingBack);
                let lost = self.rollback_user_message();
                warn!(error = %err, "provider call failed, rolled back user message");
                self.io.console.notify(Notification::warning(format!(
                    "{err}. Your last message is lost: \"{lost}\""
                )));
                TurnOutcome::RolledBack(err)
            }
            None => {
                self.transition(SessionState::RollingBack);
                self.rollback_user_message();
                debug!("request interrupted, rolled back user message");
                self.io
                    .console
                    .notify(Notification::info("Interrupted the request. Continue normally."));
                TurnOutcome::Cancelled
            }
        };

        self.transition(SessionState::AwaitingInput);
        outcome
    }

    /// Pop the in-flight user message and return a short preview of it.
    fn rollback_user_message(&mut self) -> String {
        let lost = self
            .conversation
            .rollback_last()
            .map(|m| m.content)
            .unwrap_or_default();
        let mut preview: String = lost.chars().take(LOST_PREVIEW_CHARS).collect();
        if lost.chars().count() > LOST_PREVIEW_CHARS {
            preview.push_str("...");
        }
        preview
    }

    /// Ask before saving a non-empty conversation on an abrupt exit.
    async fn offer_save(&mut self) {
        if self.conversation.is_empty() {
            return;
        }
        if !self
            .io
            .console
            .confirm("Save this conversation before exiting?")
            .await
        {
            return;
        }
        match self.io.store.save(self.conversation.messages()) {
            Ok(path) => self
                .io
                .console
                .notify(Notification::info(format!("Chat saved to {}", path.display()))),
            Err(e) => {
                warn!("failed to save transcript: {e}");
                self.io
                    .console
                    .notify(Notification::error(format!("Could not save chat: {e}")));
            }
        }
    }

    fn report_usage(&mut self) {
        if self.tracker.call_count() == 0 {
            return;
        }
        let usage = *self.tracker.total();
        let cost = self
            .tracker
            .estimated_cost(self.model.input_price_per_1k, self.model.output_price_per_1k);
        self.io.console.notify(Notification::info(format!(
            "{} calls, {} tokens ({} input + {} output), about ${cost:.4}",
            self.tracker.call_count(),
            self.tracker.total_tokens(),
            usage.input_tokens,
            usage.output_tokens,
        )));
    }
}
