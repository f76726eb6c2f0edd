//! Locating the state file and normalizing paths against it

use super::error::{StateError, StateResult};
use super::fs::FileSystem;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Name of the state file searched for in each ancestor directory
pub const STATE_FILE_NAME: &str = ".docula";

/// Search `start` and each of its ancestors for a state file.
///
/// Stats at most one candidate per ancestor, so a start directory of depth
/// `n` costs at most `n + 1` stat calls. Returns [`StateError::NotFound`]
/// once the ancestors are exhausted.
pub fn find_state_path(fs: &dyn FileSystem, start: &Path) -> StateResult<PathBuf> {
    let ancestors: Vec<&Path> = start
        .ancestors()
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect();

    for dir in ancestors {
        let candidate = dir.join(STATE_FILE_NAME);
        match fs.stat(&candidate) {
            Ok(_) => {
                debug!(path = %candidate.display(), "found state file");
                return Ok(candidate);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(StateError::io("checking state file", candidate, e)),
        }
    }

    debug!(start = %start.display(), "no state file in any ancestor");
    Err(StateError::NotFound)
}

/// Like [`find_state_path`], but falls back to `<start>/.docula` when no
/// state file exists yet.
pub fn obtain_state_path(fs: &dyn FileSystem, start: &Path) -> StateResult<PathBuf> {
    match find_state_path(fs, start) {
        Err(StateError::NotFound) => Ok(start.join(STATE_FILE_NAME)),
        other => other,
    }
}

/// Directory containing the given state file path
pub fn state_dir(state_path: &Path) -> PathBuf {
    state_path.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// Resolve `input` against `root` and return it relative to `root`.
///
/// Relative inputs are joined onto `root` first. `.` components are dropped
/// and `..` pops the previous component. Anything that ends up outside
/// `root`, or pops past the filesystem root, is [`StateError::InvalidPath`].
/// The result uses `/` separators and is empty for `root` itself.
pub fn normalize_path(root: &Path, input: &str) -> StateResult<String> {
    let input_path = Path::new(input);
    let absolute = if input_path.is_absolute() {
        input_path.to_path_buf()
    } else {
        root.join(input_path)
    };

    let mut resolved: Vec<Component> = Vec::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => continue,
            Component::ParentDir => match resolved.last() {
                Some(Component::Normal(_)) => {
                    resolved.pop();
                }
                _ => return Err(StateError::InvalidPath(input.to_string())),
            },
            other => resolved.push(other),
        }
    }

    let resolved: PathBuf = resolved.iter().collect();
    let relative = resolved
        .strip_prefix(root)
        .map_err(|_| StateError::InvalidPath(input.to_string()))?;

    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}
