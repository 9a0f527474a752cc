use std::path::Path;

use crate::io::{FileSystem, OsFileSystem};
use crate::models::{LinkOccurrence, ResolvedTarget, Span};
use crate::parsing::extract_links;
use crate::resolve::Resolver;

/// A resolved link ready for a host to turn into a clickable range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLink {
    pub span: Span,
    pub target: ResolvedTarget,
    pub tooltip: String,
}

impl DocumentLink {
    fn new(link: &LinkOccurrence, target: ResolvedTarget) -> Self {
        let tooltip = match link.label() {
            Some(label) => format!("Go to: {} ({label})", link.raw_name),
            None => format!("Go to: {}", link.raw_name),
        };
        Self {
            span: link.span,
            target,
            tooltip,
        }
    }
}

impl<F: FileSystem> Resolver<F> {
    /// Extracts every link in `text` and resolves each one independently.
    pub fn document_links<P: AsRef<Path>>(
        &self,
        text: &str,
        source_dir: &Path,
        search_roots: &[P],
    ) -> Vec<DocumentLink> {
        extract_links(text)
            .map(|link| {
                let target = self.resolve(&link.raw_name, source_dir, search_roots);
                DocumentLink::new(&link, target)
            })
            .collect()
    }
}

/// Resolves every link in a document against the real file system.
pub fn document_links<P: AsRef<Path>>(
    text: &str,
    source_dir: &Path,
    search_roots: &[P],
) -> Vec<DocumentLink> {
    Resolver::new(OsFileSystem).document_links(text, source_dir, search_roots)
}
