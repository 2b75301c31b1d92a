//! Text generator port
//!
//! Defines the interface for the external generative-text service.

use async_trait::async_trait;
use cupid_domain::{Credential, Model};
use thiserror::Error;

/// Errors that can occur when calling the generative-text service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The service rejected the credential
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Network failure, server error, or a reply we could not use
    #[error("Transport error: {0}")]
    Transport(String),
}

impl GenerationError {
    /// Check if this error means the credential is not valid
    pub fn is_auth(&self) -> bool {
        matches!(self, GenerationError::Auth(_))
    }
}

/// Gateway to a generative-text service
///
/// Implementations (adapters) live in the infrastructure layer. One call
/// maps to exactly one outbound request; retries are not expected.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a single prompt
    async fn generate(
        &self,
        model: &Model,
        prompt: &str,
        credential: &Credential,
    ) -> Result<String, GenerationError>;
}
