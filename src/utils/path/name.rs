//! Fingerprinted file names.
//!
//! ```text
//! img/logo.png  + a1b2c3d4  →  img/logo@a1b2c3d4.png
//! LICENSE       + a1b2c3d4  →  LICENSE@a1b2c3d4
//! .htaccess     + a1b2c3d4  →  .htaccess@a1b2c3d4
//! ```

use std::path::{Component, Path};

/// Separator placed between the base name and the content hash.
pub const HASH_SEPARATOR: char = '@';

/// Split a file name into base and extension (extension keeps its dot).
///
/// The extension starts at the last `.`; a leading dot belongs to the
/// base, so dotfiles have no extension.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(0) | None => (name, ""),
        Some(idx) => name.split_at(idx),
    }
}

/// Build `<parent>/<base>@<hash><ext>` from a slash-separated parent path.
///
/// An empty parent yields a bare file name.
pub fn fingerprinted_path(parent: &str, name: &str, hash: &str) -> String {
    let (base, ext) = split_name(name);
    let file = format!("{base}{HASH_SEPARATOR}{hash}{ext}");
    if parent.is_empty() {
        file
    } else {
        format!("{}/{file}", parent.trim_end_matches('/'))
    }
}

/// Render a relative path with `/` separators on every platform.
pub fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        if let Component::Normal(part) = component {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_split_name() {
        assert_eq!(split_name("logo.png"), ("logo", ".png"));
        assert_eq!(split_name("jquery.min.js"), ("jquery.min", ".js"));
        assert_eq!(split_name("LICENSE"), ("LICENSE", ""));
        assert_eq!(split_name(".htaccess"), (".htaccess", ""));
        assert_eq!(split_name("archive."), ("archive", "."));
    }

    #[test]
    fn test_fingerprinted_path() {
        assert_eq!(fingerprinted_path("", "logo.png", "a1b2c3d4"), "logo@a1b2c3d4.png");
        assert_eq!(
            fingerprinted_path("img/icons", "logo.png", "a1b2c3d4"),
            "img/icons/logo@a1b2c3d4.png"
        );
        assert_eq!(fingerprinted_path("bin", "run", "0000ffff"), "bin/run@0000ffff");
    }

    #[test]
    fn test_to_slash() {
        let path: PathBuf = ["img", "icons", "logo.png"].iter().collect();
        assert_eq!(to_slash(&path), "img/icons/logo.png");
        assert_eq!(to_slash(Path::new("")), "");
        assert_eq!(to_slash(Path::new("./a/b")), "a/b");
    }
}
