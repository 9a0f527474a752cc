use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized markdown extensions, highest priority first.
pub const MARKDOWN_EXTENSIONS: [&str; 3] = ["md", "markdown", "mdx"];

/// Dependency cache directory skipped by every directory walk.
pub const DEPENDENCY_CACHE_DIR: &str = "node_modules";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid search root: {0}")]
    InvalidSearchRoot(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks and special files. Walks never follow these.
    Other,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }
}

/// Read-only view of the file system used by link resolution.
pub trait FileSystem {
    /// True if `path` names an existing regular file (symlinks followed).
    fn is_file(&self, path: &Path) -> bool;

    /// Lists the entries of `dir`, in no particular order.
    fn read_dir(&self, dir: &Path) -> Result<Vec<DirEntry>, IoError>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_dir(&self, dir: &Path) -> Result<Vec<DirEntry>, IoError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            // Names that are not valid UTF-8 can never equal a link name
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            entries.push(DirEntry { name, kind });
        }
        Ok(entries)
    }
}

/// True for hidden directories and the dependency cache directory.
pub fn is_excluded_dir(name: &str) -> bool {
    name.starts_with('.') || name == DEPENDENCY_CACHE_DIR
}

/// Splits a file name into stem and extension when the extension is one of
/// [`MARKDOWN_EXTENSIONS`]. Matching is case-sensitive.
pub fn markdown_stem(file_name: &str) -> Option<&str> {
    let path = Path::new(file_name);
    let ext = path.extension()?.to_str()?;
    if !MARKDOWN_EXTENSIONS.contains(&ext) {
        return None;
    }
    path.file_stem()?.to_str()
}

/// Read a document and return its content
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

pub fn validate_search_root(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSearchRoot(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

/// Scan for markdown files under a search root, relative to that root.
///
/// Unlike link resolution this walk has no depth cap and reports listing
/// failures instead of skipping them.
pub fn scan_markdown_files(root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_search_root(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(&OsFileSystem, root, &RelativePathBuf::new(), &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    file_system: &impl FileSystem,
    dir: &Path,
    relative: &RelativePathBuf,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    for entry in file_system.read_dir(dir)? {
        match entry.kind {
            EntryKind::Directory if !is_excluded_dir(&entry.name) => {
                scan_directory_recursive(
                    file_system,
                    &dir.join(&entry.name),
                    &relative.join(&entry.name),
                    files,
                )?;
            }
            EntryKind::File if markdown_stem(&entry.name).is_some() => {
                files.push(relative.join(&entry.name));
            }
            _ => {}
        }
    }

    Ok(())
}
