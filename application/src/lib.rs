//! Application layer for cupid
//!
//! This crate contains use cases, port definitions, and the text request
//! client. It depends only on the domain layer.

pub mod ports;
pub mod services;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use ports::{
    key_value_store::{CREDENTIAL_KEY, KeyValueStore, StoreError},
    text_generator::{GenerationError, TextGenerator},
};
pub use services::text_request::{ClientError, ClientState, TextRequestClient};
pub use use_cases::calculate::{CalculateCompatibilityUseCase, CalculateError};
pub use use_cases::credential::{CredentialError, CredentialUseCase, RestoreOutcome};
pub use use_cases::story::{GenerateStoryUseCase, StoryError};
