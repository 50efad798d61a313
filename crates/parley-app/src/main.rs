mod cli;
mod commands;
mod console;
mod transcript;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use parley_ai::{ChatSession, Message, SessionConfig, SessionIo, TranscriptStore};
use parley_common::ParleyError;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use commands::TerminalCommands;
use console::{CtrlC, TerminalConsole};
use transcript::JsonTranscriptStore;

fn init_logging(directive: Option<&str>) {
    let directive = directive
        .and_then(|d| d.parse::<Directive>().ok())
        .unwrap_or_else(|| LevelFilter::WARN.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
}

/// Seed transcript: the configured system role, if any.
fn opening_transcript(system_role: &str) -> Vec<Message> {
    if system_role.trim().is_empty() {
        Vec::new()
    } else {
        vec![Message::system(system_role)]
    }
}

async fn run(args: cli::Args) -> parley_common::Result<()> {
    let config = parley_config::load_config(args.config.as_deref())?;
    tracing::info!(models = config.models.len(), "config loaded");

    let key = args
        .model
        .as_deref()
        .unwrap_or(config.chat.default_model.as_str());
    let model = parley_config::resolve_model(&config, key)?;

    let temperature = args.temperature.unwrap_or(config.chat.temperature);
    if !(0.0..=2.0).contains(&temperature) {
        return Err(ParleyError::Other(format!(
            "temperature must be between 0.0 and 2.0, got {temperature}"
        )));
    }

    let store = JsonTranscriptStore::new(parley_config::transcript_dir(&config)?);
    tracing::debug!(dir = %store.dir().display(), "transcript directory");
    let store: Arc<dyn TranscriptStore> = Arc::new(store);
    let io = SessionIo {
        console: Box::new(TerminalConsole::new(model.model_name.clone())),
        commands: Box::new(TerminalCommands::new(store.clone())),
        interrupt: Box::new(CtrlC),
        store,
    };

    println!(
        "Chatting with {} ({}). Type /help for commands.",
        model.model_name, model.provider
    );
    let transcript = opening_transcript(&config.chat.system_role);
    let mut session = ChatSession::start(model, SessionConfig { temperature }, transcript, io);
    session.run().await;
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());
    tracing::debug!("Parley v{} starting", env!("CARGO_PKG_VERSION"));

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("parley: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(run(args));
    // The stdin reader may still be parked in a blocking read.
    runtime.shutdown_timeout(Duration::from_millis(200));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("parley: {e}");
            ExitCode::FAILURE
        }
    }
}
