//! HTTP client for the Gemini API

use super::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use cupid_application::{GenerationError, TextGenerator};
use cupid_domain::{Credential, Model};
use reqwest::StatusCode;
use tracing::{debug, warn};

/// Public Gemini API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// [`TextGenerator`] backed by the Gemini REST API
///
/// Uses reqwest's default client settings; no request timeout is set.
#[derive(Clone)]
pub struct GeminiTextGenerator {
    client: reqwest::Client,
    base_url: String,
}

impl GeminiTextGenerator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            model.as_str()
        )
    }
}

impl Default for GeminiTextGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(
        &self,
        model: &Model,
        prompt: &str,
        credential: &Credential,
    ) -> Result<String, GenerationError> {
        let url = self.endpoint(model);
        debug!("POST {} ({} prompt bytes)", url, prompt.len());

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, credential.expose())
            .json(&GenerateContentRequest::user_prompt(prompt))
            .send()
            .await
            .map_err(|e| GenerationError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Transport(format!("Invalid response body: {}", e)))?;

        match parsed.text() {
            Some(text) => Ok(text),
            None => {
                let reason = parsed.finish_reason().unwrap_or("no candidates");
                warn!("Gemini returned no text ({})", reason);
                Err(GenerationError::Transport(format!(
                    "Empty response ({})",
                    reason
                )))
            }
        }
    }
}

/// Map a non-success response to a [`GenerationError`].
///
/// Gemini reports a bad key as `400 INVALID_ARGUMENT` with the message
/// "API key not valid" and reason `API_KEY_INVALID`; 401 and 403 are
/// treated the same way.
fn classify_failure(status: StatusCode, body: &str) -> GenerationError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| {
            let status_text = e.error.status.unwrap_or_default();
            if status_text.is_empty() {
                e.error.message
            } else {
                format!("{}: {}", status_text, e.error.message)
            }
        })
        .unwrap_or_else(|_| body.chars().take(200).collect());

    let key_rejected = body.contains("API key not valid") || body.contains("API_KEY_INVALID");
    let detail = format!("HTTP {} {}", status.as_u16(), message);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::Auth(detail),
        StatusCode::BAD_REQUEST if key_rejected => GenerationError::Auth(detail),
        _ => GenerationError::Transport(detail),
    }
}
