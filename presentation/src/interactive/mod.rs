//! Interactive terminal form

mod app;

pub use app::{InteractiveApp, InteractiveError};
