//! Linkers: mirror a source tree into a destination tree.
//!
//! - [`AssetsLinker`]: copies assets under fingerprinted names and records
//!   the original → fingerprinted mapping
//! - [`HtmlLinker`]: rewrites markup documents through the enabled HTML
//!   handles, optionally resolving asset references through an attached
//!   [`AssetsLinker`]
//!
//! Both walk the source in sorted pre-order and fail fast: the first error
//! aborts the run and partial output is left in place.

mod assets;
mod error;
mod html;


use std::fs::{self, DirBuilder};
use std::io;
use std::path::Path;

pub use assets::AssetsLinker;
pub use error::LinkError;
pub use html::HtmlLinker;

/// Mode for recreated directories.
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Fail unless `root` is an existing directory.
fn require_dir(root: &Path) -> Result<(), LinkError> {
    let meta = fs::metadata(root).map_err(LinkError::io(root))?;
    if meta.is_dir() {
        Ok(())
    } else {
        Err(LinkError::Io {
            path: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        })
    }
}

/// Create a directory (and missing parents). Existing directories are fine.
fn create_dir(path: &Path) -> Result<(), LinkError> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(path).map_err(LinkError::io(path))
}
