//! `.docula` state file management
//!
//! Handles locating, loading and saving the project state file:
//! - Upward search from a start directory
//! - Path normalization relative to the state file's directory
//! - Crash-safe writes through a temp file and rename

mod codec;
mod error;
pub mod fs;
mod manager;
#[cfg(test)]
pub(crate) mod memory;
pub mod resolver;

pub use codec::{marshal, unmarshal};
pub use error::{StateError, StateResult};
pub use fs::{FileHandle, FileInfo, FileSystem, OsFileSystem};
pub use manager::StateManager;
pub use resolver::STATE_FILE_NAME;
