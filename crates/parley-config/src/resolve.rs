//! Turning config entries into session-ready values.

use parley_common::{ConfigError, ModelDescriptor};
use std::path::PathBuf;

use crate::schema::{ModelEntry, ParleyConfig};

/// Resolve a `[models]` key into a [`ModelDescriptor`], reading the API key
/// from the process environment when the entry names a variable.
pub fn resolve_model(config: &ParleyConfig, key: &str) -> Result<ModelDescriptor, ConfigError> {
    resolve_model_with(config, key, |name| std::env::var(name).ok())
}

/// Like [`resolve_model`] with an explicit environment lookup.
pub fn resolve_model_with(
    config: &ParleyConfig,
    key: &str,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ModelDescriptor, ConfigError> {
    let entry = config
        .models
        .get(key)
        .ok_or_else(|| ConfigError::UnknownModel(key.to_string()))?;

    Ok(ModelDescriptor {
        api_key: api_key(key, entry, env)?,
        provider: entry.provider,
        model_name: entry.model_name.clone(),
        max_tokens: entry.max_tokens,
        input_price_per_1k: entry.input_price_per_1k,
        output_price_per_1k: entry.output_price_per_1k,
        base_url: entry.base_url.clone(),
    })
}

fn api_key(
    key: &str,
    entry: &ModelEntry,
    env: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    if let Some(api_key) = entry.api_key.as_deref().filter(|k| !k.is_empty()) {
        return Ok(api_key.to_string());
    }

    let var = entry
        .api_key_env
        .as_deref()
        .ok_or_else(|| ConfigError::MissingApiKey {
            model: key.to_string(),
            reason: "neither api_key nor api_key_env is set".into(),
        })?;

    env(var)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingApiKey {
            model: key.to_string(),
            reason: format!("{var} is not set"),
        })
}

/// Directory where transcripts are written.
pub fn transcript_dir(config: &ParleyConfig) -> Result<PathBuf, ConfigError> {
    if !config.chat.save_dir.trim().is_empty() {
        return Ok(PathBuf::from(&config.chat.save_dir));
    }
    let data_dir = dirs::data_dir()
        .ok_or(ConfigError::DirectoryUnavailable("data"))?;
    Ok(data_dir.join("parley").join("chats"))
}
