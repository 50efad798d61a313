//! Built-in terminal commands.

use std::io::{self, Write};
use std::sync::Arc;

use parley_ai::{CommandHandler, Dispatch, Message, TranscriptStore};
use parley_common::{Notification, ProviderKind};
use tracing::{debug, warn};

const HELP: &str = "\
Commands:
  /help               show this list
  /save               save the conversation so far
  /file <path> [text] send a file's contents, optionally after some text
  /exit, /quit        end the chat (Ctrl-D works too)
Ctrl-C while waiting for a reply abandons the request.";

/// Interprets command words typed at the prompt; anything else is sent to
/// the model unchanged.
pub struct TerminalCommands<W = io::Stdout> {
    store: Arc<dyn TranscriptStore>,
    out: W,
}

impl TerminalCommands {
    pub fn new(store: Arc<dyn TranscriptStore>) -> Self {
        Self::with_output(store, io::stdout())
    }
}

impl<W: Write> TerminalCommands<W> {
    pub fn with_output(store: Arc<dyn TranscriptStore>, out: W) -> Self {
        Self { store, out }
    }

    fn print(&mut self, text: impl std::fmt::Display) {
        if let Err(e) = writeln!(self.out, "{text}") {
            warn!("failed to write command output: {e}");
        }
    }

    fn save(&mut self, conversation: &[Message]) -> Dispatch {
        if conversation.is_empty() {
            self.print(Notification::info("Nothing to save yet."));
            return Dispatch::Skip;
        }
        match self.store.save(conversation) {
            Ok(path) => self.print(Notification::info(format!(
                "Chat saved to {}",
                path.display()
            ))),
            Err(e) => self.print(Notification::error(format!("Could not save chat: {e}"))),
        }
        Dispatch::Skip
    }

    /// `<path> [prompt...]`: the prompt, if any, goes before the file body.
    fn attach_file(&mut self, args: &str) -> Dispatch {
        let (path, prompt) = split_word(args);
        let body = match std::fs::read_to_string(path) {
            Ok(body) => body,
            Err(e) => {
                self.print(Notification::warning(format!("Cannot read {path}: {e}")));
                return Dispatch::Skip;
            }
        };
        if body.trim().is_empty() {
            self.print(Notification::warning(format!("{path} is empty.")));
            return Dispatch::Skip;
        }
        debug!(path, bytes = body.len(), "attaching file");

        if prompt.is_empty() {
            Dispatch::Content(body)
        } else {
            Dispatch::Content(format!("{prompt}\n\n{body}"))
        }
    }
}

impl<W: Write + Send> CommandHandler for TerminalCommands<W> {
    fn dispatch(
        &mut self,
        provider: ProviderKind,
        model_name: &str,
        raw: &str,
        conversation: &[Message],
    ) -> Dispatch {
        let line = raw.trim();
        if line.is_empty() {
            return Dispatch::Skip;
        }

        let (word, rest) = split_word(line);
        match word {
            "exit" | "quit" | "/exit" | "/quit" if rest.is_empty() => Dispatch::Terminate,
            "save" | "/save" if rest.is_empty() => self.save(conversation),
            "help" | "/help" if rest.is_empty() => {
                self.print(format!("Chatting with {model_name} ({provider}).\n{HELP}"));
                Dispatch::Skip
            }
            "file" | "/file" if !rest.is_empty() => self.attach_file(rest),
            _ => Dispatch::Content(raw.to_string()),
        }
    }
}

/// Split off the first whitespace-delimited word.
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}
