//! Controller for the love calculator form

use super::state::ViewState;
use super::text::UiText;
use cupid_application::{
    CalculateCompatibilityUseCase, CalculateError, CredentialError, CredentialUseCase,
    GenerateStoryUseCase, RestoreOutcome, StoryError, TextRequestClient,
};
use cupid_domain::{CompatibilityResult, CouplePair, Story};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Result of a spawned request, tagged with the calculation it belongs to
#[derive(Debug)]
pub enum Outcome {
    Calculated {
        generation: u64,
        pair: CouplePair,
        result: Result<CompatibilityResult, CalculateError>,
    },
    StoryWritten {
        generation: u64,
        result: Result<Story, StoryError>,
    },
}

impl Outcome {
    fn generation(&self) -> u64 {
        match self {
            Outcome::Calculated { generation, .. } | Outcome::StoryWritten { generation, .. } => {
                *generation
            }
        }
    }
}

/// Owns the view state and the text request client.
///
/// Every calculation bumps a generation counter. Outcomes from an older
/// generation are dropped when they arrive; the tasks themselves are never
/// cancelled.
pub struct Controller {
    state: ViewState,
    client: TextRequestClient,
    credentials: CredentialUseCase,
    text: &'static UiText,
    restored: Option<RestoreOutcome>,
    generation: u64,
    tx: mpsc::UnboundedSender<Outcome>,
    rx: mpsc::UnboundedReceiver<Outcome>,
}

impl Controller {
    /// Create the controller. A client that is not ready yet is initialized
    /// from the stored credential, if any.
    pub fn new(mut client: TextRequestClient, credentials: CredentialUseCase) -> Self {
        let restored = if client.is_initialized() {
            None
        } else {
            Some(credentials.restore(&mut client))
        };
        debug!("Credential restore: {:?}", restored);

        let (tx, rx) = mpsc::unbounded_channel();
        let text = UiText::for_language(client.language());
        let state = ViewState {
            key_needed: !client.is_initialized(),
            ..Default::default()
        };

        Self {
            state,
            client,
            credentials,
            text,
            restored,
            generation: 0,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn text(&self) -> &'static UiText {
        self.text
    }

    pub fn client(&self) -> &TextRequestClient {
        &self.client
    }

    /// What happened to the stored credential at startup, if it was consulted
    pub fn restored(&self) -> Option<RestoreOutcome> {
        self.restored
    }

    /// Take the error banner, clearing it
    pub fn take_error(&mut self) -> Option<String> {
        self.state.error.take()
    }

    /// Handle the credential form.
    ///
    /// On success the prompt closes. If the key works but cannot be
    /// persisted, the prompt still closes and a banner explains it.
    pub fn submit_key(&mut self, raw: &str) -> bool {
        match self.credentials.save(&mut self.client, raw) {
            Ok(()) => {
                self.state.key_needed = false;
                self.state.error = None;
                true
            }
            Err(CredentialError::Client(_)) => {
                self.state.error = Some(self.text.key_empty.to_string());
                false
            }
            Err(CredentialError::Store(e)) => {
                warn!("API key accepted but not persisted: {}", e);
                self.state.key_needed = false;
                self.state.error = Some(self.text.key_saved_locally_failed.to_string());
                true
            }
        }
    }

    /// Handle the calculate button. Returns whether a request was started.
    pub fn submit_calculate(&mut self, name1: &str, name2: &str) -> bool {
        if !self.state.can_calculate() {
            return false;
        }

        let pair = match CouplePair::try_new(name1, name2) {
            Ok(pair) => pair,
            Err(e) => {
                debug!("Rejected input: {}", e);
                self.state.error = Some(self.text.missing_names.to_string());
                return false;
            }
        };

        if !self.client.is_initialized() {
            self.state.error = Some(self.text.key_missing.to_string());
            self.state.key_needed = true;
            return false;
        }

        self.generation += 1;
        self.state.error = None;
        self.state.result = None;
        self.state.story = None;
        self.state.pair = None;
        self.state.is_loading = true;
        // A story still in flight belongs to the previous generation
        self.state.is_generating_story = false;

        let generation = self.generation;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = CalculateCompatibilityUseCase::execute(
                &client,
                pair.first.as_str(),
                pair.second.as_str(),
            )
            .await;
            let _ = tx.send(Outcome::Calculated {
                generation,
                pair,
                result,
            });
        });

        true
    }

    /// Handle the story button. Returns whether a request was started.
    pub fn submit_story(&mut self) -> bool {
        if !self.state.can_request_story() {
            return false;
        }
        let Some(pair) = self.state.pair.clone() else {
            return false;
        };

        self.state.is_generating_story = true;

        let generation = self.generation;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = GenerateStoryUseCase::execute(&client, &pair).await;
            let _ = tx.send(Outcome::StoryWritten { generation, result });
        });

        true
    }

    /// Fold an outcome into the view state
    pub fn apply(&mut self, outcome: Outcome) {
        if outcome.generation() != self.generation {
            debug!(
                "Dropping outcome from generation {} (current {})",
                outcome.generation(),
                self.generation
            );
            return;
        }

        match outcome {
            Outcome::Calculated { pair, result, .. } => {
                self.state.is_loading = false;
                match result {
                    Ok(result) => {
                        self.state.pair = Some(pair);
                        self.state.result = Some(result);
                    }
                    Err(CalculateError::NotInitialized) => {
                        self.state.error = Some(self.text.key_missing.to_string());
                        self.state.key_needed = true;
                    }
                    Err(e) => {
                        warn!("Calculation failed: {}", e);
                        self.state.error = Some(self.text.calculate_failed.to_string());
                    }
                }
            }
            Outcome::StoryWritten { result, .. } => {
                self.state.is_generating_story = false;
                match result {
                    Ok(story) => self.state.story = Some(story),
                    Err(e) => {
                        warn!("Story failed: {}", e);
                        self.state.error = Some(self.text.story_failed.to_string());
                    }
                }
            }
        }
    }

    /// Wait for the next outcome without applying it
    pub async fn next_outcome(&mut self) -> Option<Outcome> {
        self.rx.recv().await
    }

    /// Apply outcomes until nothing is in flight
    pub async fn settle(&mut self) {
        while self.state.is_busy() {
            match self.rx.recv().await {
                Some(outcome) => self.apply(outcome),
                None => break,
            }
        }
    }

}
