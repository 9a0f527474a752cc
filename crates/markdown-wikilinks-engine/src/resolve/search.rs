use std::path::{Component, Path, PathBuf};

use crate::io::{EntryKind, FileSystem, MARKDOWN_EXTENSIONS, is_excluded_dir, markdown_stem};

/// Deepest directory level listed below a search root. The root itself is
/// level 0, so `root/a/b/c/Name.md` is reachable and `root/a/b/c/d/Name.md`
/// is not.
pub const MAX_SEARCH_DEPTH: usize = 3;

/// `dir/<name>.<ext>`, with `name` always appended below `dir`.
///
/// A leading root or drive prefix in `name` is dropped so `/Foo` cannot
/// replace `dir`. `..` segments are kept.
pub fn candidate_path(dir: &Path, name: &str, ext: &str) -> PathBuf {
    let file_name = PathBuf::from(format!("{name}.{ext}"));
    let relative: PathBuf = file_name
        .components()
        .skip_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();
    dir.join(relative)
}

/// Tests `dir/<name>.<ext>` for each extension in priority order.
pub fn find_in_dir(fs: &impl FileSystem, dir: &Path, name: &str) -> Option<PathBuf> {
    MARKDOWN_EXTENSIONS
        .iter()
        .map(|ext| candidate_path(dir, name, ext))
        .find(|candidate| fs.is_file(candidate))
}

/// Depth-first search below `root` for a markdown file whose stem is `name`.
///
/// Entries are visited in file name order, directories and files
/// interleaved. A directory that cannot be listed contributes nothing.
pub fn find_recursive(fs: &impl FileSystem, root: &Path, name: &str) -> Option<PathBuf> {
    walk(fs, root, name, 0)
}

fn walk(fs: &impl FileSystem, dir: &Path, name: &str, depth: usize) -> Option<PathBuf> {
    let mut entries = fs.read_dir(dir).unwrap_or_else(|err| {
        log::debug!("skipping unreadable directory {}: {err}", dir.display());
        Vec::new()
    });
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    for entry in entries {
        match entry.kind {
            EntryKind::Directory if depth < MAX_SEARCH_DEPTH && !is_excluded_dir(&entry.name) => {
                if let Some(found) = walk(fs, &dir.join(&entry.name), name, depth + 1) {
                    return Some(found);
                }
            }
            EntryKind::File if markdown_stem(&entry.name) == Some(name) => {
                return Some(dir.join(&entry.name));
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::DirEntry;
    use crate::tests::FakeFileSystem;
    use pretty_assertions::assert_eq;

    #[test]
    fn find_in_dir_respects_extension_priority() {
        let fs = FakeFileSystem::new()
            .with_file("/ws/Page.mdx")
            .with_file("/ws/Page.markdown");

        assert_eq!(
            find_in_dir(&fs, Path::new("/ws"), "Page"),
            Some(PathBuf::from("/ws/Page.markdown"))
        );
        assert_eq!(find_in_dir(&fs, Path::new("/ws"), "Other"), None);
    }

    #[test]
    fn rooted_names_stay_below_the_directory() {
        assert_eq!(
            candidate_path(Path::new("/ws/docs"), "/Foo", "md"),
            PathBuf::from("/ws/docs/Foo.md")
        );
        assert_eq!(
            candidate_path(Path::new("/ws/docs"), "//a/Foo", "mdx"),
            PathBuf::from("/ws/docs/a/Foo.mdx")
        );
        assert_eq!(
            candidate_path(Path::new("/ws/docs"), "../Foo", "md"),
            PathBuf::from("/ws/docs/../Foo.md")
        );
        assert_eq!(
            candidate_path(Path::new("/ws"), "", "md"),
            PathBuf::from("/ws/.md")
        );
    }

    #[test]
    fn find_in_dir_does_not_escape_on_rooted_names() {
        let fs = FakeFileSystem::new()
            .with_file("/Foo.md")
            .with_file("/ws/docs/Bar.md");

        assert_eq!(find_in_dir(&fs, Path::new("/ws/docs"), "/Foo"), None);
        assert_eq!(
            find_in_dir(&fs, Path::new("/ws/docs"), "/Bar"),
            Some(PathBuf::from("/ws/docs/Bar.md"))
        );
    }

    #[test]
    fn walk_visits_entries_in_name_order() {
        // alpha/ sorts before beta/, so its lower-priority extension still wins
        let fs = FakeFileSystem::new()
            .with_dir("/ws", vec![DirEntry::directory("beta"), DirEntry::directory("alpha")])
            .with_dir("/ws/alpha", vec![DirEntry::file("Target.mdx")])
            .with_dir("/ws/beta", vec![DirEntry::file("Target.md")]);

        assert_eq!(
            find_recursive(&fs, Path::new("/ws"), "Target"),
            Some(PathBuf::from("/ws/alpha/Target.mdx"))
        );
    }

    #[test]
    fn walk_goes_deep_before_later_siblings() {
        let fs = FakeFileSystem::new()
            .with_dir("/ws", vec![DirEntry::directory("a"), DirEntry::file("b.md")])
            .with_dir("/ws/a", vec![DirEntry::directory("inner")])
            .with_dir("/ws/a/inner", vec![DirEntry::file("b.md")]);

        assert_eq!(
            find_recursive(&fs, Path::new("/ws"), "b"),
            Some(PathBuf::from("/ws/a/inner/b.md"))
        );
    }

    #[test]
    fn walk_stops_at_depth_limit() {
        let fs = FakeFileSystem::new()
            .with_dir("/ws", vec![DirEntry::directory("1")])
            .with_dir("/ws/1", vec![DirEntry::directory("2")])
            .with_dir("/ws/1/2", vec![DirEntry::directory("3")])
            .with_dir("/ws/1/2/3", vec![DirEntry::directory("4"), DirEntry::file("Three.md")])
            .with_dir("/ws/1/2/3/4", vec![DirEntry::file("Four.md")]);

        assert_eq!(
            find_recursive(&fs, Path::new("/ws"), "Three"),
            Some(PathBuf::from("/ws/1/2/3/Three.md"))
        );
        assert_eq!(find_recursive(&fs, Path::new("/ws"), "Four"), None);
        assert!(!fs.was_listed("/ws/1/2/3/4"));
    }

    #[test]
    fn walk_skips_hidden_and_dependency_directories() {
        let fs = FakeFileSystem::new()
            .with_dir(
                "/ws",
                vec![DirEntry::directory(".hidden"), DirEntry::directory("node_modules")],
            )
            .with_dir("/ws/.hidden", vec![DirEntry::file("Target.md")])
            .with_dir("/ws/node_modules", vec![DirEntry::file("Target.md")]);

        assert_eq!(find_recursive(&fs, Path::new("/ws"), "Target"), None);
        assert!(!fs.was_listed("/ws/.hidden"));
        assert!(!fs.was_listed("/ws/node_modules"));
    }

    #[test]
    fn unreadable_directory_is_skipped() {
        let fs = FakeFileSystem::new()
            .with_dir("/ws", vec![DirEntry::directory("locked"), DirEntry::directory("open")])
            .with_unreadable_dir("/ws/locked")
            .with_dir("/ws/open", vec![DirEntry::file("Target.md")]);

        assert_eq!(
            find_recursive(&fs, Path::new("/ws"), "Target"),
            Some(PathBuf::from("/ws/open/Target.md"))
        );
        assert!(fs.was_listed("/ws/locked"));
    }

    #[test]
    fn name_match_is_exact_and_case_sensitive() {
        let fs = FakeFileSystem::new().with_dir(
            "/ws",
            vec![
                DirEntry::file("target.md"),
                DirEntry::file("Target.txt"),
                DirEntry::file("Target.md.bak"),
                DirEntry::file("My Target.md"),
            ],
        );

        assert_eq!(find_recursive(&fs, Path::new("/ws"), "Target"), None);
    }

    #[test]
    fn directories_named_like_targets_do_not_match() {
        let fs = FakeFileSystem::new()
            .with_dir("/ws", vec![DirEntry::directory("Target.md")])
            .with_dir("/ws/Target.md", vec![]);

        assert_eq!(find_recursive(&fs, Path::new("/ws"), "Target"), None);
    }
}
