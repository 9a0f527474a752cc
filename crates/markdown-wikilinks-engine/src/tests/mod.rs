use crate::io::{DirEntry, FileSystem, IoError};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary workspace directory for resolution tests
pub fn create_test_workspace() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file (and any missing parent directories) with content
pub fn create_test_file(workspace: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = workspace.path().join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

/// In-memory [`FileSystem`] with scripted listings and listing failures.
#[derive(Default)]
pub struct FakeFileSystem {
    files: HashSet<PathBuf>,
    dirs: HashMap<PathBuf, Vec<DirEntry>>,
    unreadable: HashSet<PathBuf>,
    listed: RefCell<Vec<PathBuf>>,
}

impl FakeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `path` pass [`FileSystem::is_file`]. Does not add it to any listing.
    pub fn with_file(mut self, path: &str) -> Self {
        self.files.insert(PathBuf::from(path));
        self
    }

    pub fn with_dir(mut self, path: &str, entries: Vec<DirEntry>) -> Self {
        self.dirs.insert(PathBuf::from(path), entries);
        self
    }

    /// Listing `path` fails with a permission error.
    pub fn with_unreadable_dir(mut self, path: &str) -> Self {
        self.unreadable.insert(PathBuf::from(path));
        self
    }

    /// True if [`FileSystem::read_dir`] was attempted on `path`.
    pub fn was_listed(&self, path: &str) -> bool {
        self.listed.borrow().iter().any(|p| p == Path::new(path))
    }
}

impl FileSystem for FakeFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn read_dir(&self, dir: &Path) -> Result<Vec<DirEntry>, IoError> {
        self.listed.borrow_mut().push(dir.to_path_buf());
        if self.unreadable.contains(dir) {
            return Err(IoError::Io(std::io::Error::from(
                std::io::ErrorKind::PermissionDenied,
            )));
        }
        self.dirs
            .get(dir)
            .cloned()
            .ok_or_else(|| IoError::NotFound(dir.to_path_buf()))
    }
}
