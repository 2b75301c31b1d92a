//! Form state and the controller that drives it
//!
//! User actions become tasks spawned on the tokio runtime; their outcomes
//! come back over a channel and are folded into [`ViewState`].

mod controller;
mod state;
mod text;

pub use controller::{Controller, Outcome};
pub use state::ViewState;
pub use text::UiText;
