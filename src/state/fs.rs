//! Filesystem capability used by the state manager
//!
//! Everything the resolver and manager touch on disk goes through
//! [`FileSystem`], so tests can swap in an in-memory implementation.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Metadata returned by [`FileSystem::stat`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileInfo {
    pub is_dir: bool,
    pub len: u64,
}

/// A writable file created through [`FileSystem::create`]
pub trait FileHandle {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Flush and release the handle. Data is durable once this returns `Ok`.
    fn close(self: Box<Self>) -> io::Result<()>;
}

/// The six filesystem operations the state layer depends on.
///
/// `stat` must report a missing file as [`io::ErrorKind::NotFound`]; every
/// other error kind is treated as fatal by the resolver.
pub trait FileSystem {
    fn create(&self, path: &Path) -> io::Result<Box<dyn FileHandle>>;
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn remove(&self, path: &Path) -> io::Result<()>;
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
    fn getwd(&self) -> io::Result<PathBuf>;
    fn stat(&self, path: &Path) -> io::Result<FileInfo>;
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

struct OsFile(fs::File);

impl FileHandle for OsFile {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.0.write_all(data)
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        let OsFile(mut file) = *self;
        file.flush()?;
        file.sync_all()
    }
}

impl FileSystem for OsFileSystem {
    fn create(&self, path: &Path) -> io::Result<Box<dyn FileHandle>> {
        Ok(Box::new(OsFile(fs::File::create(path)?)))
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn getwd(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn stat(&self, path: &Path) -> io::Result<FileInfo> {
        let meta = fs::metadata(path)?;
        Ok(FileInfo {
            is_dir: meta.is_dir(),
            len: meta.len(),
        })
    }
}
