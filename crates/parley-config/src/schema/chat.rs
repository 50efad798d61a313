//! Chat session configuration types.

use serde::{Deserialize, Serialize};

/// Settings applied to every chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Sampling temperature on the OpenAI scale (0.0-2.0).
    pub temperature: f64,
    /// Key into `[models]` used when `--model` is not given.
    pub default_model: String,
    /// Opening system message; empty disables it.
    pub system_role: String,
    /// Directory for saved transcripts; empty uses the platform data dir.
    pub save_dir: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            default_model: "gpt-4o".into(),
            system_role: "You are a helpful assistant.".into(),
            save_dir: String::new(),
        }
    }
}
