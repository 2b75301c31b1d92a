//! View state for the love calculator form
//!
//! Plain data plus derived predicates. The [`Controller`](super::Controller)
//! is the only writer.

use cupid_domain::{CompatibilityResult, CouplePair, Story};

/// Everything the form renders
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Names that produced the current result
    pub pair: Option<CouplePair>,
    pub result: Option<CompatibilityResult>,
    pub story: Option<Story>,
    pub is_loading: bool,
    pub is_generating_story: bool,
    /// Error banner text
    pub error: Option<String>,
    /// Credential prompt must be shown
    pub key_needed: bool,
}

impl ViewState {
    /// Calculate button enabled
    pub fn can_calculate(&self) -> bool {
        !self.is_loading
    }

    /// Story button visible
    pub fn can_request_story(&self) -> bool {
        self.result.is_some() && !self.is_loading && self.story.is_none() && !self.is_generating_story
    }

    /// Any request in flight
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_generating_story
    }
}
