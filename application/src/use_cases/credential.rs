//! Credential lifecycle use case.
//!
//! Restores the credential from the persistent store at startup, saves a
//! newly entered one, and forgets it on request.

use crate::ports::key_value_store::{CREDENTIAL_KEY, KeyValueStore, StoreError};
use crate::services::text_request::{ClientError, TextRequestClient};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from saving or forgetting a credential
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Could not persist API key: {0}")]
    Store(#[from] StoreError),
}

/// Result of a startup restore
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A stored credential initialized the client
    Restored,
    /// Nothing stored (or the store could not be read)
    Missing,
    /// A stored credential was rejected and removed from the store
    Discarded,
}

/// Use case tying the [`TextRequestClient`] to a [`KeyValueStore`].
pub struct CredentialUseCase {
    store: Arc<dyn KeyValueStore>,
}

impl CredentialUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Initialize the client from the stored credential, if any.
    ///
    /// A stored value that fails initialization is removed. This is the only
    /// place the stored credential is cleared automatically.
    pub fn restore(&self, client: &mut TextRequestClient) -> RestoreOutcome {
        let stored = match self.store.get(CREDENTIAL_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("No stored API key");
                return RestoreOutcome::Missing;
            }
            Err(e) => {
                warn!("Could not read stored API key: {}", e);
                return RestoreOutcome::Missing;
            }
        };

        match client.initialize(&stored) {
            Ok(()) => {
                info!("Restored stored API key");
                RestoreOutcome::Restored
            }
            Err(e) => {
                warn!("Stored API key rejected ({}); removing it", e);
                if let Err(e) = self.store.remove(CREDENTIAL_KEY) {
                    warn!("Could not remove stored API key: {}", e);
                }
                RestoreOutcome::Discarded
            }
        }
    }

    /// Initialize the client with a new credential and persist it.
    ///
    /// Nothing is written if initialization fails. If writing fails the
    /// client stays ready for this process and the error is returned.
    pub fn save(&self, client: &mut TextRequestClient, raw: &str) -> Result<(), CredentialError> {
        client.initialize(raw)?;
        self.store.set(CREDENTIAL_KEY, raw.trim())?;
        info!("Saved API key");
        Ok(())
    }

    /// Remove the stored credential. A client that is already ready stays ready.
    pub fn forget(&self) -> Result<(), CredentialError> {
        self.store.remove(CREDENTIAL_KEY)?;
        info!("Removed stored API key");
        Ok(())
    }

    /// Check whether a credential is currently stored
    pub fn has_stored(&self) -> bool {
        matches!(self.store.get(CREDENTIAL_KEY), Ok(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryStore, ScriptedGenerator};

    fn client() -> TextRequestClient {
        TextRequestClient::new(Arc::new(ScriptedGenerator::default()))
    }

    #[test]
    fn test_restore_missing() {
        let use_case = CredentialUseCase::new(Arc::new(MemoryStore::default()));
        let mut client = client();
        assert_eq!(use_case.restore(&mut client), RestoreOutcome::Missing);
        assert!(!client.is_initialized());
    }

    #[test]
    fn test_restore_valid_key() {
        let store = Arc::new(MemoryStore::with_entry(CREDENTIAL_KEY, "AIza-stored"));
        let use_case = CredentialUseCase::new(store.clone());
        let mut client = client();
        assert_eq!(use_case.restore(&mut client), RestoreOutcome::Restored);
        assert!(client.is_initialized());
        assert_eq!(store.peek(CREDENTIAL_KEY).as_deref(), Some("AIza-stored"));
    }

    #[test]
    fn test_restore_discards_blank_key() {
        let store = Arc::new(MemoryStore::with_entry(CREDENTIAL_KEY, "   "));
        let use_case = CredentialUseCase::new(store.clone());
        let mut client = client();
        assert_eq!(use_case.restore(&mut client), RestoreOutcome::Discarded);
        assert!(!client.is_initialized());
        assert!(store.peek(CREDENTIAL_KEY).is_none());
    }

    #[test]
    fn test_restore_treats_read_error_as_missing() {
        let use_case = CredentialUseCase::new(Arc::new(MemoryStore::failing_reads()));
        let mut client = client();
        assert_eq!(use_case.restore(&mut client), RestoreOutcome::Missing);
    }

    #[test]
    fn test_save_persists_after_initialize() {
        let store = Arc::new(MemoryStore::default());
        let use_case = CredentialUseCase::new(store.clone());
        let mut client = client();

        use_case.save(&mut client, " AIza-new ").unwrap();
        assert!(client.is_initialized());
        assert_eq!(store.peek(CREDENTIAL_KEY).as_deref(), Some("AIza-new"));
        assert!(use_case.has_stored());
    }

    #[test]
    fn test_save_blank_writes_nothing() {
        let store = Arc::new(MemoryStore::default());
        let use_case = CredentialUseCase::new(store.clone());
        let mut client = client();

        let err = use_case.save(&mut client, "").unwrap_err();
        assert!(matches!(err, CredentialError::Client(ClientError::InvalidCredential)));
        assert!(store.peek(CREDENTIAL_KEY).is_none());
        assert!(!client.is_initialized());
    }

    #[test]
    fn test_save_store_failure_keeps_client_ready() {
        let use_case = CredentialUseCase::new(Arc::new(MemoryStore::failing_writes()));
        let mut client = client();

        let err = use_case.save(&mut client, "AIza-new").unwrap_err();
        assert!(matches!(err, CredentialError::Store(_)));
        assert!(client.is_initialized());
    }

    #[test]
    fn test_forget_keeps_client_ready() {
        let store = Arc::new(MemoryStore::with_entry(CREDENTIAL_KEY, "AIza-stored"));
        let use_case = CredentialUseCase::new(store.clone());
        let mut client = client();
        use_case.restore(&mut client);

        use_case.forget().unwrap();
        assert!(store.peek(CREDENTIAL_KEY).is_none());
        assert!(client.is_initialized());
        assert!(!use_case.has_stored());
    }
}
