//! Infrastructure layer for cupid
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGenerationConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FilePromptConfig, FileStorageConfig,
};
pub use gemini::{DEFAULT_BASE_URL, GeminiTextGenerator};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
