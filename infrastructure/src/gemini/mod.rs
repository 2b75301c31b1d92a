//! Gemini adapter
//!
//! Implements the [`TextGenerator`](cupid_application::TextGenerator) port
//! over the Gemini `generateContent` REST endpoint.

mod adapter;
mod types;

pub use adapter::{DEFAULT_BASE_URL, GeminiTextGenerator};
