//! In-memory [`FileSystem`] for unit tests
//!
//! Records every call in order and can be told to fail a given operation.

use super::fs::{FileHandle, FileInfo, FileSystem};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Create,
    Write,
    Close,
    ReadFile,
    Remove,
    Rename,
    Getwd,
    Stat,
}

#[derive(Default)]
struct Inner {
    cwd: PathBuf,
    files: BTreeMap<PathBuf, Vec<u8>>,
    failures: HashMap<Op, io::ErrorKind>,
    calls: Vec<String>,
}

impl Inner {
    fn record(&mut self, op: Op, detail: String) -> io::Result<()> {
        self.calls.push(detail);
        match self.failures.get(&op) {
            Some(kind) => Err(io::Error::new(*kind, format!("injected {:?} failure", op))),
            None => Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct MemoryFileSystem {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryFileSystem {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                cwd: cwd.into(),
                ..Inner::default()
            })),
        }
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.inner
            .borrow_mut()
            .files
            .insert(path.into(), content.as_bytes().to_vec());
        self
    }

    pub fn fail(self, op: Op, kind: io::ErrorKind) -> Self {
        self.inner.borrow_mut().failures.insert(op, kind);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.borrow().calls.clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.inner
            .borrow()
            .calls
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.inner
            .borrow()
            .files
            .get(path.as_ref())
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

struct MemoryFile {
    path: PathBuf,
    buf: Vec<u8>,
    inner: Rc<RefCell<Inner>>,
}

impl FileHandle for MemoryFile {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.inner
            .borrow_mut()
            .record(Op::Write, format!("write {}", self.path.display()))?;
        self.buf.extend_from_slice(data);
        Ok(())
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.record(Op::Close, format!("close {}", self.path.display()))?;
        inner.files.insert(self.path.clone(), self.buf.clone());
        Ok(())
    }
}

impl FileSystem for MemoryFileSystem {
    fn create(&self, path: &Path) -> io::Result<Box<dyn FileHandle>> {
        let mut inner = self.inner.borrow_mut();
        inner.record(Op::Create, format!("create {}", path.display()))?;
        inner.files.insert(path.to_path_buf(), Vec::new());
        Ok(Box::new(MemoryFile {
            path: path.to_path_buf(),
            buf: Vec::new(),
            inner: Rc::clone(&self.inner),
        }))
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        let mut inner = self.inner.borrow_mut();
        inner.record(Op::ReadFile, format!("read {}", path.display()))?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.record(Op::Remove, format!("remove {}", path.display()))?;
        inner
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.record(
            Op::Rename,
            format!("rename {} {}", from.display(), to.display()),
        )?;
        let data = inner
            .files
            .remove(from)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
        inner.files.insert(to.to_path_buf(), data);
        Ok(())
    }

    fn getwd(&self) -> io::Result<PathBuf> {
        let mut inner = self.inner.borrow_mut();
        inner.record(Op::Getwd, "getwd".to_string())?;
        Ok(inner.cwd.clone())
    }

    fn stat(&self, path: &Path) -> io::Result<FileInfo> {
        let mut inner = self.inner.borrow_mut();
        inner.record(Op::Stat, format!("stat {}", path.display()))?;
        match inner.files.get(path) {
            Some(data) => Ok(FileInfo {
                is_dir: false,
                len: data.len() as u64,
            }),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}
