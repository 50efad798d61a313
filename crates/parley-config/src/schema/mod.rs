//! Configuration schema types for Parley.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod models;

pub use chat::*;
pub use models::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration for Parley.
///
/// Only override what you want to change. Declaring any `[models.*]`
/// table replaces the built-in model list entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParleyConfig {
    pub chat: ChatConfig,
    pub models: BTreeMap<String, ModelEntry>,
}

impl Default for ParleyConfig {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            models: default_models(),
        }
    }
}
