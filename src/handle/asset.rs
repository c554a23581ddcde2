//! Asset-copy handles.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

/// What an asset handle may observe about the file being copied.
#[derive(Debug, Clone, Copy)]
pub struct AssetContext<'a> {
    /// Asset source root.
    pub src_root: &'a Path,
    /// Asset destination root.
    pub dst_root: &'a Path,
    /// Original path relative to `src_root` (`/`-separated).
    pub rel: &'a str,
    /// Fingerprinted path relative to `dst_root` (`/`-separated).
    pub target: &'a str,
}

/// Invoked once per asset before its bytes are copied.
///
/// Receives the destination writer and returns the writer the bytes should
/// flow into: the same one, or a wrapper around it.
pub type AssetHandle =
    Arc<dyn Fn(&AssetContext<'_>, &Path, Box<dyn Write>) -> Result<Box<dyn Write>> + Send + Sync>;

/// Wrap a function or closure as an [`AssetHandle`].
pub fn asset_handle<F>(f: F) -> AssetHandle
where
    F: Fn(&AssetContext<'_>, &Path, Box<dyn Write>) -> Result<Box<dyn Write>>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}
