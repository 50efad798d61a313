//! Parley configuration system.
//!
//! TOML-based configuration with a built-in model catalogue and full
//! validation. All sections use sensible defaults so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use parley_config::{load_config, resolve_model};
//!
//! let config = load_config(None).expect("failed to load config");
//! let model = resolve_model(&config, &config.chat.default_model);
//! println!("{model:?}");
//! ```

pub mod resolve;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use resolve::{resolve_model, resolve_model_with, transcript_dir};
pub use schema::{ChatConfig, ModelEntry, ParleyConfig};

use parley_common::ConfigError;
use std::path::Path;

/// Load and validate config.
///
/// With `path` the file must exist; without it the platform default is
/// used and created on first run.
pub fn load_config(path: Option<&Path>) -> Result<ParleyConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\ntemperature = 4.0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_requires_explicit_file_to_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_accepts_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[chat]
default_model = "claude"

[models.claude]
provider = "anthropic"
model_name = "claude-3-5-haiku-20241022"
api_key = "sk-ant"
max_tokens = 1024
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.models.len(), 1);
        assert_eq!(config.models["claude"].max_tokens, 1024);
    }
}
