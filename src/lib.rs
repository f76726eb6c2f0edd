// Docula - tooling for project documentation
// Tracks architecture decision record directories in a `.docula` state file

pub mod cli;
pub mod logging;
pub mod models;
pub mod state;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{AdrDirectory, IndexType, State};
pub use state::{StateError, StateManager};
