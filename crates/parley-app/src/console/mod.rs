//! Terminal implementations of the session's console and interrupt.

mod spinner;

use std::io::{IsTerminal, Write};

use async_trait::async_trait;
use parley_ai::{Console, Input, Interrupt};
use parley_common::Notification;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;

use spinner::Spinner;

const WORKING_LABEL: &str = "Generating a response...";

/// Line-oriented stdin/stdout console.
pub struct TerminalConsole {
    lines: Lines<BufReader<Stdin>>,
    title: String,
    spinner: Option<Spinner>,
}

impl TerminalConsole {
    /// `title` heads every reply, e.g. the model name.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            title: title.into(),
            spinner: None,
        }
    }

    /// Print `prompt` and wait for a line, Ctrl-C, or end of input.
    async fn prompt(&mut self, prompt: &str) -> Input {
        let mut out = std::io::stdout();
        if let Err(e) = write!(out, "{prompt}").and_then(|()| out.flush()) {
            warn!("failed to write prompt: {e}");
        }

        tokio::select! {
            line = self.lines.next_line() => match line {
                Ok(Some(line)) => Input::Line(line),
                Ok(None) => {
                    println!();
                    Input::Closed
                }
                Err(e) => {
                    warn!("stdin read failed: {e}");
                    Input::Closed
                }
            },
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    warn!("Ctrl-C listener failed: {e}");
                }
                println!();
                Input::Interrupted
            }
        }
    }
}

#[async_trait]
impl Console for TerminalConsole {
    async fn read_line(&mut self) -> Input {
        self.prompt("> ").await
    }

    async fn confirm(&mut self, question: &str) -> bool {
        match self.prompt(&format!("{question} [y/N] ")).await {
            Input::Line(answer) => is_yes(&answer),
            Input::Interrupted | Input::Closed => false,
        }
    }

    fn start_working(&mut self) {
        if self.spinner.is_none() && std::io::stderr().is_terminal() {
            self.spinner = Some(Spinner::start(WORKING_LABEL));
        }
    }

    fn stop_working(&mut self) {
        self.spinner = None;
    }

    fn show_reply(&mut self, text: &str) {
        println!("\n{}:\n{}\n", self.title, text.trim_end());
    }

    fn notify(&mut self, notification: Notification) {
        println!("{notification}");
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Resolves on SIGINT / Ctrl-C.
pub struct CtrlC;

#[async_trait]
impl Interrupt for CtrlC {
    async fn triggered(&self) {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Ctrl-C listener failed, requests cannot be interrupted: {e}");
            std::future::pending::<()>().await;
        }
    }
}
