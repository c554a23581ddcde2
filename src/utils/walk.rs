//! Pre-order directory walk.
//!
//! Thin wrapper over `jwalk` yielding, for every entry below the root, its
//! kind, name, root-relative path and full path. Entries are sorted by name
//! and a directory is always yielded before its descendants, so callers can
//! create output directories before writing files into them.
//!
//! Hidden files are not skipped.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

use super::path::to_slash;

/// Kind of a walked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    /// Anything that is not a directory.
    File,
}

/// One filesystem entry below the walk root.
#[derive(Debug, Clone)]
pub struct WalkEntry {
    pub kind: EntryKind,
    /// File or directory name.
    pub name: String,
    /// Path relative to the walk root.
    pub rel: PathBuf,
    /// Full path on disk.
    pub path: PathBuf,
}

impl WalkEntry {
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Root-relative path with `/` separators (mapping key form).
    pub fn rel_slash(&self) -> String {
        to_slash(&self.rel)
    }

    /// Root-relative parent directory with `/` separators (empty at root).
    pub fn parent_slash(&self) -> String {
        self.rel.parent().map(to_slash).unwrap_or_default()
    }
}

/// Walk everything below `root` (the root itself is not yielded).
pub fn walk(root: &Path) -> impl Iterator<Item = Result<WalkEntry, jwalk::Error>> + use<> {
    let root = root.to_path_buf();
    WalkDir::new(&root)
        .sort(true)
        .skip_hidden(false)
        .follow_links(false)
        .min_depth(1)
        .into_iter()
        .map(move |entry| {
            let entry = entry?;
            let path = entry.path();
            let rel = path.strip_prefix(&root).unwrap_or(&path).to_path_buf();
            let kind = if entry.file_type().is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };
            Ok(WalkEntry {
                kind,
                name: entry.file_name().to_string_lossy().into_owned(),
                rel,
                path,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn collect(root: &Path) -> Vec<(EntryKind, String)> {
        walk(root)
            .map(|e| e.unwrap())
            .map(|e| (e.kind, e.rel_slash()))
            .collect()
    }

    #[test]
    fn test_walk_is_pre_order() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("css/vendor")).unwrap();
        fs::write(dir.path().join("css/vendor/reset.css"), "").unwrap();
        fs::write(dir.path().join("css/site.css"), "").unwrap();
        fs::write(dir.path().join("app.js"), "").unwrap();

        let entries = collect(dir.path());
        let pos = |rel: &str| entries.iter().position(|(_, r)| r == rel).unwrap();

        assert_eq!(entries.len(), 5);
        assert!(pos("css") < pos("css/site.css"));
        assert!(pos("css") < pos("css/vendor"));
        assert!(pos("css/vendor") < pos("css/vendor/reset.css"));
        assert_eq!(entries[pos("css/vendor")].0, EntryKind::Dir);
        assert_eq!(entries[pos("app.js")].0, EntryKind::File);
    }

    #[test]
    fn test_walk_keeps_hidden_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".htaccess"), "").unwrap();

        let entries = collect(dir.path());
        assert_eq!(entries, vec![(EntryKind::File, ".htaccess".to_string())]);
    }

    #[test]
    fn test_parent_slash() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("img/icons")).unwrap();
        fs::write(dir.path().join("img/icons/a.svg"), "").unwrap();
        fs::write(dir.path().join("b.svg"), "").unwrap();

        let parents: Vec<_> = walk(dir.path())
            .map(|e| e.unwrap())
            .filter(|e| !e.is_dir())
            .map(|e| (e.name.clone(), e.parent_slash()))
            .collect();
        assert!(parents.contains(&("a.svg".to_string(), "img/icons".to_string())));
        assert!(parents.contains(&("b.svg".to_string(), String::new())));
    }
}
