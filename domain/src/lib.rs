//! Domain layer for cupid
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Score
//!
//! A deterministic compatibility score in `[40, 100]`, derived from the
//! combined code points of two names. No randomness, no network.
//!
//! ## Reading
//!
//! The outcome of one calculation: the score, a short generated message,
//! and optionally a longer generated story about the couple.

pub mod config;
pub mod core;
pub mod prompt;
pub mod reading;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    credential::Credential,
    error::{DomainError, Which},
    model::Model,
    names::{CouplePair, Name},
    score::{CompatibilityScore, ScoreTier, score},
};
pub use prompt::{Fallback, FallbackReason, Language, PromptTemplate, RequestKind};
pub use reading::{CompatibilityResult, Reading, Story};
