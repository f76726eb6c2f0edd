use super::survey::{Configuration, FixedSurvey, InteractiveSurvey, Survey};
use crate::models::{AdrDirectory, IndexType};
use crate::state::{FileSystem, StateManager};
use crate::Result;
use anyhow::Context;
use colored::Colorize;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Errors specific to `adr init`
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("adr dir already initialized: {0}")]
    AlreadyRegistered(String),
}

/// Creates ADR directories on disk
pub trait DirCreator {
    /// Create `path` and any missing parents. An existing directory may be
    /// reported as [`io::ErrorKind::AlreadyExists`].
    fn mkdir(&self, path: &Path) -> io::Result<()>;
}

pub struct OsDirCreator;

impl DirCreator for OsDirCreator {
    fn mkdir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

/// Entry point for `docula adr init <path>`
pub fn run<F: FileSystem>(
    manager: &StateManager<F>,
    path: &str,
    name: Option<&str>,
    index: Option<IndexType>,
) -> Result<()> {
    let survey: Box<dyn Survey> = match name {
        Some(n) => Box::new(FixedSurvey(Configuration::new(
            n,
            index.unwrap_or_default(),
        ))),
        None => Box::new(InteractiveSurvey),
    };

    let dir = initialize(manager, survey.as_ref(), &OsDirCreator, path)?;

    let location = if dir.path.is_empty() { "." } else { dir.path.as_str() };
    println!(
        "{}",
        format!("✅ Initialized ADR directory '{}'", location).green().bold()
    );
    println!("   name:  {}", dir.name);
    println!("   index: {}", dir.index.unwrap_or_default());
    Ok(())
}

/// Register `path` as an ADR directory.
///
/// The path is normalized and checked against the current state before
/// anything is asked or written, so a duplicate leaves disk untouched.
pub fn initialize<F: FileSystem>(
    manager: &StateManager<F>,
    survey: &dyn Survey,
    dirs: &dyn DirCreator,
    path: &str,
) -> Result<AdrDirectory> {
    let path = manager.normalize_path(path).context("normalize path")?;

    let mut state = manager.load_or_default().context("loading state")?;
    if state.adr.contains_path(&path) {
        return Err(InitError::AlreadyRegistered(path).into());
    }

    let config = survey.ask().context("loading configuration")?;

    let state_dir = manager.state_dir().context("obtain state path")?;
    let abs_path = state_dir.join(&path);
    match dirs.mkdir(&abs_path) {
        Ok(()) => debug!(path = %abs_path.display(), "created adr dir"),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!(path = %abs_path.display(), "adr dir already exists");
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("create adr dir '{}'", abs_path.display()));
        }
    }

    let dir = AdrDirectory::new(path, config.name, config.index_type);
    state.adr.directories.push(dir.clone());
    manager.save(&state).context("saving state")?;

    info!(path = %dir.path, name = %dir.name, "registered adr dir");
    Ok(dir)
}
