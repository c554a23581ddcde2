//! Read-only context handed to HTML handles.

use crate::linker::AssetsLinker;

use super::StatusView;

/// What an HTML handle may observe while visiting a document.
pub struct HtmlContext<'a> {
    status: &'a StatusView<'a>,
    assets: Option<&'a AssetsLinker>,
    assets_prefix: &'a str,
}

impl<'a> HtmlContext<'a> {
    pub fn new(
        status: &'a StatusView<'a>,
        assets: Option<&'a AssetsLinker>,
        assets_prefix: &'a str,
    ) -> Self {
        Self {
            status,
            assets,
            assets_prefix,
        }
    }

    /// Whether a handle (id or alias) is enabled for the current document.
    #[inline]
    pub fn is_enabled(&self, key: &str) -> bool {
        self.status.is_enabled(key)
    }

    /// Fingerprinted path of an asset, if an assets linker is attached and
    /// saw the file in its last run.
    pub fn asset_path(&self, rel: &str) -> Option<&'a str> {
        self.assets?.asset_path(rel)
    }

    /// URL prefix placed before fingerprinted asset paths.
    #[inline]
    pub fn assets_prefix(&self) -> &'a str {
        self.assets_prefix
    }
}
