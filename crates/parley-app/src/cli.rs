use std::path::PathBuf;

use clap::Parser;

/// Parley: chat with OpenAI, Anthropic and Mistral models from the terminal.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct Args {
    /// Model key from the `[models]` config table.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Sampling temperature (0.0-2.0), overriding the config value.
    #[arg(short = 't', long)]
    pub temperature: Option<f64>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
