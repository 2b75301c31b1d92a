//! Configuration file loading for cupid
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `CUPID_<SECTION>__<KEY>` (e.g. `CUPID_PROMPT__LANGUAGE=en`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./cupid.toml` or `./.cupid.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/cupid/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGenerationConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FilePromptConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
