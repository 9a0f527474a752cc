pub mod io;
pub mod links;
pub mod models;
pub mod parsing;
pub mod resolve;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::{DirEntry, EntryKind, FileSystem, IoError, OsFileSystem};
pub use links::{DocumentLink, document_links};
pub use models::{LinkOccurrence, ResolvedTarget, Span};
pub use parsing::{LinkIter, extract_links, extract_links_vec};
pub use resolve::{Resolver, resolve};
