//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Log file used by the interactive form.
    /// Defaults to `<data_dir>/cupid/cupid.log`.
    pub file: Option<String>,
}

impl FileLoggingConfig {
    pub fn resolved_file(&self) -> Option<PathBuf> {
        self.file
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| dirs::data_dir().map(|d| d.join("cupid").join("cupid.log")))
    }
}
