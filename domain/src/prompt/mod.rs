//! Prompt templates and canned fallback texts
//!
//! Every user-visible generated string comes from here: the prompts sent
//! to the model, and the texts shown in place of generated content when
//! the service call fails.

mod fallback;
mod language;
mod template;

pub use fallback::{Fallback, FallbackReason};
pub use language::Language;
pub use template::PromptTemplate;

/// Which kind of generated text a request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Short message accompanying a score
    Message,
    /// Longer story of how the couple met
    Story,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Message => "message",
            RequestKind::Story => "story",
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
