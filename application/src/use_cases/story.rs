//! Generate story use case.

use crate::services::text_request::{ClientError, TextRequestClient};
use cupid_domain::{CouplePair, Story};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while generating a story
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoryError {
    #[error("Text service is not initialized; provide an API key first")]
    NotInitialized,
}

/// Use case for generating a [`Story`] about an already-validated pair.
pub struct GenerateStoryUseCase;

impl GenerateStoryUseCase {
    pub async fn execute(client: &TextRequestClient, pair: &CouplePair) -> Result<Story, StoryError> {
        info!("Writing story for {}", pair);
        let text = client
            .request_story(pair.first.as_str(), pair.second.as_str())
            .await
            .map_err(|e| match e {
                ClientError::NotInitialized | ClientError::InvalidCredential => {
                    StoryError::NotInitialized
                }
            })?;
        Ok(Story::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedGenerator;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_story_requires_initialization() {
        let client = TextRequestClient::new(Arc::new(ScriptedGenerator::default()));
        let pair = CouplePair::try_new("Ani", "Budi").unwrap();
        assert_eq!(
            GenerateStoryUseCase::execute(&client, &pair).await,
            Err(StoryError::NotInitialized)
        );
    }

    #[tokio::test]
    async fn test_story_prompt_uses_both_names() {
        let generator = Arc::new(ScriptedGenerator::replying(["Suatu hari..."]));
        let mut client = TextRequestClient::new(generator.clone());
        client.initialize("token").unwrap();

        let pair = CouplePair::try_new("Ani", "Budi").unwrap();
        let story = GenerateStoryUseCase::execute(&client, &pair).await.unwrap();
        assert_eq!(story.text(), "Suatu hari...");

        let prompt = &generator.calls()[0].prompt;
        assert!(prompt.contains("'Ani'") && prompt.contains("'Budi'"));
    }
}
