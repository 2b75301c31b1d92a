//! Name value objects

use super::error::{DomainError, Which};
use serde::{Deserialize, Serialize};

/// A person's name as typed by the user (Value Object)
///
/// Never empty or whitespace-only. The entered text is kept untouched so
/// that prompts and the scorer see exactly what the user entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Try to create a name, returning None if blank
    pub fn try_new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two names a reading is computed for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouplePair {
    pub first: Name,
    pub second: Name,
}

impl CouplePair {
    /// Validate both inputs, reporting the first missing one
    pub fn try_new(
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let first = Name::try_new(first).ok_or(DomainError::MissingName(Which::First))?;
        let second = Name::try_new(second).ok_or(DomainError::MissingName(Which::Second))?;
        Ok(Self { first, second })
    }
}

impl std::fmt::Display for CouplePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} & {}", self.first, self.second)
    }
}
