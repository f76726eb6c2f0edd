//! StateManager - load and save the `.docula` state file

use super::codec;
use super::error::{StateError, StateResult};
use super::fs::{FileSystem, OsFileSystem};
use super::resolver;
use crate::models::State;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Loads and saves the state file found above a start directory.
///
/// The start directory is fixed at construction; every operation resolves
/// the state file from it again, nothing is cached between calls.
pub struct StateManager<F: FileSystem = OsFileSystem> {
    fs: F,
    start_dir: PathBuf,
}

impl StateManager<OsFileSystem> {
    /// Manager rooted at the process working directory
    pub fn from_current_dir() -> StateResult<Self> {
        Self::from_working_dir(OsFileSystem)
    }
}

impl<F: FileSystem> StateManager<F> {
    pub fn new(fs: F, start_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            start_dir: start_dir.into(),
        }
    }

    /// Manager rooted at the working directory reported by `fs`
    pub fn from_working_dir(fs: F) -> StateResult<Self> {
        let cwd = fs
            .getwd()
            .map_err(|e| StateError::io("get wd", PathBuf::new(), e))?;
        Ok(Self::new(fs, cwd))
    }

    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    /// Load the nearest state file.
    ///
    /// Returns [`StateError::NotFound`] when no state file exists above the
    /// start directory; callers usually treat that as an empty [`State`].
    pub fn load(&self) -> StateResult<State> {
        let path = resolver::find_state_path(&self.fs, &self.start_dir)?;
        let data = self
            .fs
            .read_file(&path)
            .map_err(|e| StateError::io("reading state file", &path, e))?;
        let state = codec::unmarshal(&data)?;
        debug!(
            path = %path.display(),
            dirs = state.adr.directories.len(),
            "loaded state"
        );
        Ok(state)
    }

    /// Load the nearest state file, or the empty state if there is none
    pub fn load_or_default(&self) -> StateResult<State> {
        match self.load() {
            Err(StateError::NotFound) => Ok(State::default()),
            other => other,
        }
    }

    /// Write `state` to the state file it was loaded from, or to
    /// `<start_dir>/.docula` if none exists yet.
    ///
    /// Data goes to `<path>.tmp` first and is renamed over the target, so
    /// the state file is either the old or the new content. On failure the
    /// temp file is removed on a best-effort basis.
    pub fn save(&self, state: &State) -> StateResult<()> {
        let path = resolver::obtain_state_path(&self.fs, &self.start_dir)?;
        let data = codec::marshal(state)?;

        let mut tmp_name = path.clone().into_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        let mut tmp = self
            .fs
            .create(&tmp_path)
            .map_err(|e| StateError::io("creating tmp buffer", &tmp_path, e))?;

        if let Err(e) = tmp.write_all(data.as_bytes()) {
            self.discard(&tmp_path);
            return Err(StateError::io("writing to buffer", &tmp_path, e));
        }
        if let Err(e) = tmp.close() {
            self.discard(&tmp_path);
            return Err(StateError::io("closing tmp buffer", &tmp_path, e));
        }
        if let Err(e) = self.fs.rename(&tmp_path, &path) {
            self.discard(&tmp_path);
            return Err(StateError::io("renaming tmp buffer", &path, e));
        }

        debug!(path = %path.display(), "saved state");
        Ok(())
    }

    /// Convert `path` into a path relative to the state file's directory
    pub fn normalize_path(&self, path: &str) -> StateResult<String> {
        let root = self.state_dir()?;
        resolver::normalize_path(&root, path)
    }

    /// Directory holding the state file, or the start directory if there
    /// is no state file yet
    pub fn state_dir(&self) -> StateResult<PathBuf> {
        let path = resolver::obtain_state_path(&self.fs, &self.start_dir)?;
        Ok(resolver::state_dir(&path))
    }

    fn discard(&self, tmp_path: &Path) {
        if let Err(e) = self.fs.remove(tmp_path) {
            warn!(path = %tmp_path.display(), error = %e, "failed to remove tmp buffer");
        }
    }
}
