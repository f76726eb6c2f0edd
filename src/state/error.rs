use std::io;
use std::path::PathBuf;

/// Result type for state file operations
pub type StateResult<T> = std::result::Result<T, StateError>;

/// Errors raised while locating, reading or writing the state file
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No state file in the start directory or any of its parents
    #[error("no state file found")]
    NotFound,

    /// The path resolves outside the directory holding the state file
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("{phase} '{}': {source}", .path.display())]
    Io {
        phase: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unmarshal docula state file: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("marshal yaml: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

impl StateError {
    pub(crate) fn io(phase: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        StateError::Io {
            phase,
            path: path.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StateError::NotFound)
    }

    /// Kind of the underlying I/O failure, if this error wraps one
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            StateError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
