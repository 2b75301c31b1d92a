//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod calculate;
pub mod credential;
pub mod story;
