//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use parley_common::{ConfigError, ProviderKind};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_parley_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[chat]
temperature = 0.2
system_role = ""
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.chat.temperature, 0.2);
    assert!(config.chat.system_role.is_empty());
    // Defaults preserved
    assert_eq!(config.chat.default_model, "gpt-4o");
    assert!(config.models.contains_key("claude-sonnet"));
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn unknown_provider_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[models.gemini]
provider = "gemini"
model_name = "gemini-pro"
"#,
    )
    .unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_still_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[chat]
temperature = 7.5
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.chat.temperature, 7.5);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parley").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.chat.default_model, "gpt-4o");
    assert_eq!(config.models.len(), 3);
    assert_eq!(config.models["mistral-large"].provider, ProviderKind::Mistral);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::ParleyConfig;

    let content = default_config_toml();
    let config: ParleyConfig = toml::from_str(&content).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("parley"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn unreadable_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();

    // A directory exists but cannot be read as a file.
    let err = load_from_path(dir.path()).unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert_eq!(path, dir.path()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn default_config_under_a_file_reports_the_blocked_directory() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("parley");
    std::fs::write(&blocker, "not a directory").unwrap();

    let err = create_default_config(&blocker.join("config.toml")).unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert_eq!(path, blocker),
        other => panic!("unexpected error: {other}"),
    }
}
