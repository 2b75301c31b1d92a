//! Key-value store port
//!
//! A minimal persistent string store, addressed by fixed keys. Only the
//! credential is persisted.

use thiserror::Error;

/// Key the credential is stored under
pub const CREDENTIAL_KEY: &str = "gemini-api-key";

/// Errors from the persistent store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt store: {0}")]
    Corrupt(String),
}

/// Persistent key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
