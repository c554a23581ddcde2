//! Typed root causes of linker failures.
//!
//! Linker operations return `anyhow::Result`; the underlying [`LinkError`]
//! can be recovered with `downcast_ref`.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("IO error at `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Directory walk failed")]
    Walk(#[from] jwalk::Error),

    #[error("Cannot parse `{}`: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Handle `{id}` failed on `{}`", path.display())]
    Handle {
        id: String,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl LinkError {
    /// `map_err` adapter tagging an IO error with its path.
    pub fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path the failure is attached to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } | Self::Handle { path, .. } => {
                Some(path)
            }
            Self::Walk(_) => None,
        }
    }
}
