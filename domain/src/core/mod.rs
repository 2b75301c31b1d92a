//! Core domain concepts shared across all subdomains.
//!
//! - [`score::score`] - the deterministic compatibility scorer
//! - [`names::CouplePair`] - two validated names
//! - [`credential::Credential`] - opaque token for the text service
//! - [`model::Model`] - generative model identifiers
//! - [`error::DomainError`] - domain-level errors

pub mod credential;
pub mod error;
pub mod model;
pub mod names;
pub mod score;
