//! Text request client
//!
//! Gated wrapper around the [`TextGenerator`] port. The client starts
//! uninitialized and becomes ready once a credential is supplied. Requests
//! in the ready state never fail: service errors are logged and replaced
//! by a canned [`Fallback`] text so the UI always has something to show.

use crate::ports::text_generator::{GenerationError, TextGenerator};
use cupid_domain::{
    CompatibilityScore, Credential, Fallback, FallbackReason, Language, Model, PromptTemplate,
    RequestKind,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned by the client itself (never by the service)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientError {
    #[error("Text service is not initialized; provide an API key first")]
    NotInitialized,

    #[error("API key must not be empty")]
    InvalidCredential,
}

/// Initialization state of the client
#[derive(Debug, Clone, Default)]
pub enum ClientState {
    #[default]
    Uninitialized,
    Ready(Credential),
}

/// Client for the message and story requests
///
/// Cloning is cheap: the generator is shared and the state is a small
/// value, so a spawned task can take its own snapshot.
#[derive(Clone)]
pub struct TextRequestClient {
    generator: Arc<dyn TextGenerator>,
    model: Model,
    language: Language,
    state: ClientState,
}

impl TextRequestClient {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            model: Model::default(),
            language: Language::default(),
            state: ClientState::Uninitialized,
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// Supply the credential. A blank credential leaves the state unchanged.
    pub fn initialize(&mut self, raw: &str) -> Result<(), ClientError> {
        let credential = Credential::try_new(raw).map_err(|_| ClientError::InvalidCredential)?;
        info!("Text service initialized with key {}", credential);
        self.state = ClientState::Ready(credential);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state, ClientState::Ready(_))
    }

    /// Ask for the short message that accompanies a score
    pub async fn request_message(
        &self,
        name1: &str,
        name2: &str,
        score: CompatibilityScore,
    ) -> Result<String, ClientError> {
        let credential = self.credential()?;
        let prompt = PromptTemplate::love_message(self.language, name1, name2, score);
        Ok(self.generate(RequestKind::Message, &prompt, credential).await)
    }

    /// Ask for a longer story about how the two met
    pub async fn request_story(&self, name1: &str, name2: &str) -> Result<String, ClientError> {
        let credential = self.credential()?;
        let prompt = PromptTemplate::love_story(self.language, name1, name2);
        Ok(self.generate(RequestKind::Story, &prompt, credential).await)
    }

    fn credential(&self) -> Result<&Credential, ClientError> {
        match &self.state {
            ClientState::Ready(credential) => Ok(credential),
            ClientState::Uninitialized => Err(ClientError::NotInitialized),
        }
    }

    async fn generate(&self, kind: RequestKind, prompt: &str, credential: &Credential) -> String {
        debug!("Requesting {} from {}", kind, self.model);

        match self.generator.generate(&self.model, prompt, credential).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("Generating {} failed: {}", kind, e);
                let reason = match e {
                    GenerationError::Auth(_) => FallbackReason::InvalidCredential,
                    GenerationError::Transport(_) => FallbackReason::Unavailable,
                };
                Fallback::text(self.language, kind, reason).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedGenerator;
    use cupid_domain::score;

    fn ready_client(generator: Arc<ScriptedGenerator>) -> TextRequestClient {
        let mut client = TextRequestClient::new(generator);
        client.initialize("valid-looking-token").unwrap();
        client
    }

    #[test]
    fn test_initialize_rejects_blank() {
        let mut client = TextRequestClient::new(Arc::new(ScriptedGenerator::default()));
        assert_eq!(client.initialize(""), Err(ClientError::InvalidCredential));
        assert_eq!(client.initialize("   "), Err(ClientError::InvalidCredential));
        assert!(!client.is_initialized());
    }

    #[test]
    fn test_initialize_transitions_to_ready() {
        let mut client = TextRequestClient::new(Arc::new(ScriptedGenerator::default()));
        assert!(!client.is_initialized());
        client.initialize("valid-looking-token").unwrap();
        assert!(client.is_initialized());
    }

    #[test]
    fn test_failed_reinitialize_keeps_previous_credential() {
        let mut client = TextRequestClient::new(Arc::new(ScriptedGenerator::default()));
        client.initialize("first-token").unwrap();
        assert!(client.initialize("").is_err());
        match client.state() {
            ClientState::Ready(c) => assert_eq!(c.expose(), "first-token"),
            ClientState::Uninitialized => panic!("client lost its credential"),
        }
    }

    #[tokio::test]
    async fn test_requests_fail_when_uninitialized() {
        let generator = Arc::new(ScriptedGenerator::default());
        let client = TextRequestClient::new(generator.clone());

        let msg = client.request_message("Ani", "Budi", score("Ani", "Budi")).await;
        assert_eq!(msg, Err(ClientError::NotInitialized));

        let story = client.request_story("Ani", "Budi").await;
        assert_eq!(story, Err(ClientError::NotInitialized));

        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_message_is_trimmed_and_prompt_carries_inputs() {
        let generator = Arc::new(ScriptedGenerator::replying(["  Cinta sejati!  \n"]));
        let client = ready_client(generator.clone());

        let s = score("Romeo", "Juliet");
        let msg = client.request_message("Romeo", "Juliet", s).await.unwrap();
        assert_eq!(msg, "Cinta sejati!");

        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].prompt.contains("'Romeo'"));
        assert!(calls[0].prompt.contains("80%"));
        assert_eq!(calls[0].credential, "valid-looking-token");
        assert_eq!(calls[0].model, Model::Gemini25Flash);
    }

    #[tokio::test]
    async fn test_auth_failure_yields_specific_fallback() {
        let generator = Arc::new(ScriptedGenerator::failing(GenerationError::Auth(
            "API key not valid".into(),
        )));
        let client = ready_client(generator);

        let msg = client
            .request_message("Ani", "Budi", score("Ani", "Budi"))
            .await
            .unwrap();
        assert_eq!(
            msg,
            Fallback::text(
                Language::Indonesian,
                RequestKind::Message,
                FallbackReason::InvalidCredential
            )
        );

        let story = client.request_story("Ani", "Budi").await.unwrap();
        assert_eq!(
            story,
            Fallback::text(
                Language::Indonesian,
                RequestKind::Story,
                FallbackReason::InvalidCredential
            )
        );
    }

    #[tokio::test]
    async fn test_transport_failure_yields_generic_fallback() {
        let generator = Arc::new(ScriptedGenerator::failing(GenerationError::Transport(
            "connection reset".into(),
        )));
        let client = ready_client(generator).with_language(Language::English);

        let msg = client
            .request_message("Ani", "Budi", score("Ani", "Budi"))
            .await
            .unwrap();
        let auth_fallback = Fallback::text(
            Language::English,
            RequestKind::Message,
            FallbackReason::InvalidCredential,
        );
        assert_ne!(msg, auth_fallback);
        assert_eq!(
            msg,
            Fallback::text(
                Language::English,
                RequestKind::Message,
                FallbackReason::Unavailable
            )
        );

        let story = client.request_story("Ani", "Budi").await.unwrap();
        assert_eq!(
            story,
            Fallback::text(
                Language::English,
                RequestKind::Story,
                FallbackReason::Unavailable
            )
        );
    }

    #[tokio::test]
    async fn test_no_retry_on_failure() {
        let generator = Arc::new(ScriptedGenerator::failing(GenerationError::Transport(
            "503".into(),
        )));
        let client = ready_client(generator.clone());

        let _ = client.request_story("Ani", "Budi").await;
        assert_eq!(generator.call_count(), 1);
    }
}
