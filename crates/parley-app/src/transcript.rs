//! Saving conversations as JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use parley_ai::{Message, TranscriptStore};
use parley_common::ParleyError;
use tracing::info;

/// Writes each saved conversation to `<dir>/<YYYYmmdd-HHMMSS>.json`.
pub struct JsonTranscriptStore {
    dir: PathBuf,
}

impl JsonTranscriptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// First unused file name for `stamp`, suffixing `-1`, `-2`, ... when
    /// several chats are saved within the same second.
    fn next_path(&self, stamp: &str) -> PathBuf {
        let mut path = self.dir.join(format!("{stamp}.json"));
        let mut n = 1;
        while path.exists() {
            path = self.dir.join(format!("{stamp}-{n}.json"));
            n += 1;
        }
        path
    }
}

impl TranscriptStore for JsonTranscriptStore {
    fn save(&self, conversation: &[Message]) -> parley_common::Result<PathBuf> {
        if conversation.is_empty() {
            return Err(ParleyError::Other("conversation is empty".into()));
        }

        fs::create_dir_all(&self.dir)?;
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
        let path = self.next_path(&stamp);

        let json = serde_json::to_string_pretty(conversation)?;
        fs::write(&path, json)?;

        info!(path = %path.display(), messages = conversation.len(), "transcript saved");
        Ok(path)
    }
}
