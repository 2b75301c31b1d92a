//! Storage configuration from TOML (`[storage]` section)

use crate::storage::FileKeyValueStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Path of the JSON store holding the API key.
    /// Defaults to `<data_dir>/cupid/storage.json`.
    pub path: Option<String>,
}

impl FileStorageConfig {
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path
            .as_ref()
            .map(PathBuf::from)
            .or_else(FileKeyValueStore::default_path)
    }
}
