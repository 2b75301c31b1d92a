//! Presentation layer for cupid
//!
//! This crate contains CLI definitions, the view state and controller,
//! output formatters, progress spinners and the interactive terminal form.

pub mod cli;
pub mod interactive;
pub mod output;
pub mod progress;
pub mod view;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use interactive::{InteractiveApp, InteractiveError};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::Spinner;
pub use view::{Controller, Outcome, UiText, ViewState};
