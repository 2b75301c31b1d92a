//! Calculate compatibility use case.
//!
//! Validates the names, computes the score, and asks the text service for
//! a message to go with it.

use crate::services::text_request::{ClientError, TextRequestClient};
use cupid_domain::{CompatibilityResult, CouplePair, DomainError, score};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during a calculation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculateError {
    #[error("{0}")]
    Validation(#[from] DomainError),

    #[error("Text service is not initialized; provide an API key first")]
    NotInitialized,
}

impl From<ClientError> for CalculateError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::NotInitialized => CalculateError::NotInitialized,
            ClientError::InvalidCredential => {
                CalculateError::Validation(DomainError::InvalidCredential)
            }
        }
    }
}

/// Use case for computing a [`CompatibilityResult`].
pub struct CalculateCompatibilityUseCase;

impl CalculateCompatibilityUseCase {
    /// Run a calculation.
    ///
    /// Names are validated before the client state is checked, so a user
    /// with no key still gets name errors first.
    pub async fn execute(
        client: &TextRequestClient,
        name1: &str,
        name2: &str,
    ) -> Result<CompatibilityResult, CalculateError> {
        let pair = CouplePair::try_new(name1, name2)?;
        if !client.is_initialized() {
            return Err(CalculateError::NotInitialized);
        }

        let score = score(pair.first.as_str(), pair.second.as_str());
        info!("Calculated {} for {}", score, pair);

        let message = client
            .request_message(pair.first.as_str(), pair.second.as_str(), score)
            .await?;

        Ok(CompatibilityResult::new(score, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedGenerator;
    use cupid_domain::Which;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_validation_comes_before_initialization() {
        let client = TextRequestClient::new(Arc::new(ScriptedGenerator::default()));
        let err = CalculateCompatibilityUseCase::execute(&client, "", "Budi")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CalculateError::Validation(DomainError::MissingName(Which::First))
        );
    }

    #[tokio::test]
    async fn test_not_initialized() {
        let generator = Arc::new(ScriptedGenerator::default());
        let client = TextRequestClient::new(generator.clone());
        let err = CalculateCompatibilityUseCase::execute(&client, "Ani", "Budi")
            .await
            .unwrap_err();
        assert_eq!(err, CalculateError::NotInitialized);
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_calculation() {
        let generator = Arc::new(ScriptedGenerator::replying(["Kalian serasi!"]));
        let mut client = TextRequestClient::new(generator.clone());
        client.initialize("token").unwrap();

        let result = CalculateCompatibilityUseCase::execute(&client, "Romeo", "Juliet")
            .await
            .unwrap();
        assert_eq!(result.score.value(), 80);
        assert_eq!(result.message, "Kalian serasi!");
        assert_eq!(generator.call_count(), 1);
    }
}
