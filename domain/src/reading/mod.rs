//! Reading entities: what one calculation produces

use crate::core::names::CouplePair;
use crate::core::score::CompatibilityScore;
use serde::{Deserialize, Serialize};

/// Score plus the short message generated for it
///
/// Created fresh on every calculation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub score: CompatibilityScore,
    pub message: String,
}

impl CompatibilityResult {
    pub fn new(score: CompatibilityScore, message: impl Into<String>) -> Self {
        Self {
            score,
            message: message.into(),
        }
    }
}

/// A generated love story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Story(String);

impl Story {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Story {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Complete output of a one-shot run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub pair: CouplePair,
    #[serde(flatten)]
    pub result: CompatibilityResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<Story>,
}

impl Reading {
    pub fn new(pair: CouplePair, result: CompatibilityResult) -> Self {
        Self {
            pair,
            result,
            story: None,
        }
    }

    pub fn with_story(mut self, story: Story) -> Self {
        self.story = Some(story);
        self
    }
}
