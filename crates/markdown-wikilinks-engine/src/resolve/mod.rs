//! # Target Resolution
//!
//! Maps a link name to a file. Tiers are tried in order and the first hit
//! wins:
//!
//! 1. **Sibling**: `<source dir>/<name>.<ext>`
//! 2. **Workspace root**: `<root>/<name>.<ext>` for each root in order
//! 3. **Recursive**: depth-first walk of each root, down to
//!    [`MAX_SEARCH_DEPTH`] levels, skipping hidden and `node_modules`
//!    directories
//! 4. **Pending creation**: `<source dir>/<name>.md`
//!
//! Extensions are tried as `.md`, `.markdown`, `.mdx`. Resolution only reads
//! the file system and never fails: unreadable directories count as empty.
//!
//! Names are always appended below a directory: a leading `/` is dropped, so
//! `[[/Page]]` means `<dir>/Page.md`. `..` segments are kept as given, and
//! `[[../elsewhere/Page]]` is looked up outside the source directory.

pub mod search;

use std::path::{Path, PathBuf};

use crate::io::{FileSystem, MARKDOWN_EXTENSIONS, OsFileSystem};
use crate::models::ResolvedTarget;
pub use search::MAX_SEARCH_DEPTH;
use search::{candidate_path, find_in_dir, find_recursive};

/// Resolves link names against a [`FileSystem`]. Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct Resolver<F = OsFileSystem> {
    fs: F,
}

impl<F: FileSystem> Resolver<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Resolves `raw_name` as linked from a document in `source_dir`.
    pub fn resolve<P: AsRef<Path>>(
        &self,
        raw_name: &str,
        source_dir: &Path,
        search_roots: &[P],
    ) -> ResolvedTarget {
        if let Some(path) = find_in_dir(&self.fs, source_dir, raw_name) {
            log::trace!("{raw_name:?}: sibling {}", path.display());
            return ResolvedTarget::ExistingFile { path };
        }

        for root in search_roots {
            if let Some(path) = find_in_dir(&self.fs, root.as_ref(), raw_name) {
                log::trace!("{raw_name:?}: workspace root {}", path.display());
                return ResolvedTarget::ExistingFile { path };
            }
        }

        for root in search_roots {
            if let Some(path) = find_recursive(&self.fs, root.as_ref(), raw_name) {
                log::trace!("{raw_name:?}: recursive search {}", path.display());
                return ResolvedTarget::ExistingFile { path };
            }
        }

        log::trace!("{raw_name:?}: no match, pending creation");
        ResolvedTarget::PendingCreation {
            suggested_path: suggested_path(source_dir, raw_name),
            canonical_name: raw_name.to_string(),
        }
    }
}

/// Resolves `raw_name` against the real file system.
pub fn resolve<P: AsRef<Path>>(
    raw_name: &str,
    source_dir: &Path,
    search_roots: &[P],
) -> ResolvedTarget {
    Resolver::new(OsFileSystem).resolve(raw_name, source_dir, search_roots)
}

/// Where a missing link target would be created.
fn suggested_path(source_dir: &Path, raw_name: &str) -> PathBuf {
    candidate_path(source_dir, raw_name, MARKDOWN_EXTENSIONS[0])
}
