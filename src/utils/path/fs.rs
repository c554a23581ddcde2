//! Filesystem path resolution.

use std::path::{Path, PathBuf};

/// Resolve `path` against `base` unless it is already absolute.
///
/// No canonicalization happens: destination directories usually do not
/// exist yet when configuration is resolved.
///
/// # Example
/// ```ignore
/// use webloader::utils::path::resolve_against;
/// let abs = resolve_against(Path::new("public"), Path::new("/srv/site"));
/// assert_eq!(abs, PathBuf::from("/srv/site/public"));
/// ```
#[inline]
pub fn resolve_against(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
