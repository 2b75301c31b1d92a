//! Domain error types

use thiserror::Error;

/// Which of the two name inputs an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Which {
    First,
    Second,
}

impl std::fmt::Display for Which {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Which::First => write!(f, "first"),
            Which::Second => write!(f, "second"),
        }
    }
}

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("The {0} name is missing")]
    MissingName(Which),

    #[error("Credential must not be empty")]
    InvalidCredential,
}

impl DomainError {
    /// Check if this error comes from user input validation
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::MissingName(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_display() {
        let error = DomainError::MissingName(Which::Second);
        assert_eq!(error.to_string(), "The second name is missing");
    }

    #[test]
    fn test_is_validation_check() {
        assert!(DomainError::MissingName(Which::First).is_validation());
        assert!(!DomainError::InvalidCredential.is_validation());
    }
}
