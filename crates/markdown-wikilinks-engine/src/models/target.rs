use std::path::{Path, PathBuf};

/// URI scheme marking a link target that does not exist yet.
pub const CREATE_SCHEME: &str = "markdown-wikilinks";

const FILE_PREFIX: &str = "file://";

/// Where a wiki link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// A file that existed on disk when the link was resolved.
    ExistingFile { path: PathBuf },
    /// No file matched. A consumer may create `canonical_name` at
    /// `suggested_path`; the resolver itself never does.
    PendingCreation {
        suggested_path: PathBuf,
        canonical_name: String,
    },
}

impl ResolvedTarget {
    /// The path the link opens: the existing file, or the suggested location.
    pub fn path(&self) -> &Path {
        match self {
            ResolvedTarget::ExistingFile { path } => path,
            ResolvedTarget::PendingCreation { suggested_path, .. } => suggested_path,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ResolvedTarget::PendingCreation { .. })
    }

    /// Renders the target as a URI a host can attach to a clickable range.
    ///
    /// Existing files become `file://` URIs. Pending targets use
    /// [`CREATE_SCHEME`] with a `create=true&name=...` query so the host can
    /// tell them apart and offer to create the file.
    pub fn to_uri(&self) -> String {
        match self {
            ResolvedTarget::ExistingFile { path } => {
                format!("{FILE_PREFIX}{}", encode_path(path))
            }
            ResolvedTarget::PendingCreation {
                suggested_path,
                canonical_name,
            } => format!(
                "{CREATE_SCHEME}:{}?create=true&name={}",
                encode_path(suggested_path),
                urlencoding::encode(canonical_name)
            ),
        }
    }

    /// Parses a URI produced by [`ResolvedTarget::to_uri`].
    ///
    /// Returns `None` for any other scheme, or for a create URI missing the
    /// `create=true` marker or the `name` parameter.
    pub fn from_uri(uri: &str) -> Option<Self> {
        if let Some(rest) = uri.strip_prefix(FILE_PREFIX) {
            return Some(ResolvedTarget::ExistingFile {
                path: PathBuf::from(urlencoding::decode(rest).ok()?.into_owned()),
            });
        }

        let rest = uri.strip_prefix(CREATE_SCHEME)?.strip_prefix(':')?;
        let (path, query) = rest.split_once('?')?;

        let mut create = false;
        let mut name = None;
        for pair in query.split('&') {
            match pair.split_once('=') {
                Some(("create", "true")) => create = true,
                Some(("name", value)) => {
                    name = Some(urlencoding::decode(value).ok()?.into_owned());
                }
                _ => {}
            }
        }
        if !create {
            return None;
        }

        Some(ResolvedTarget::PendingCreation {
            suggested_path: PathBuf::from(urlencoding::decode(path).ok()?.into_owned()),
            canonical_name: name?,
        })
    }
}

/// Percent-encodes each `/`-separated segment of a path, keeping separators.
fn encode_path(path: &Path) -> String {
    path.to_string_lossy()
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
