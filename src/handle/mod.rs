//! Transform handles for both linking pipelines.
//!
//! # HTML handles
//!
//! An [`HtmlHandleRegistry`] maps a symbolic id to a handle function, a
//! default-enabled flag, and alias ids. It is built once at start-up and
//! shared (via `Arc`) by every [`HtmlLinker`](crate::linker::HtmlLinker);
//! it holds no per-run state.
//!
//! | Id            | Default | Alias               | Effect                              |
//! |---------------|---------|---------------------|-------------------------------------|
//! | `zip`         | on      | `allow-zip`         | whitespace minification             |
//! | `no-comment`  | on      | `disallow-comment`  | drop comments (only while `zip` on) |
//! | `link-assets` | on      | `allow-link-assets` | rewrite `@/` references             |
//!
//! Handles get a read-only [`HtmlContext`], the document path and the node
//! being visited. They may mutate the node and its subtree.
//!
//! # Asset handles
//!
//! [`AssetHandle`]s are an ordered list on each
//! [`AssetsLinker`](crate::linker::AssetsLinker), invoked for every copied
//! file with the destination writer before any bytes flow.

mod asset;
mod comment;
mod context;
pub mod directive;
mod link;
mod status;
mod zip;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use rustc_hash::FxHashMap;

use crate::dom::Handle;

pub use asset::{AssetContext, AssetHandle, asset_handle};
pub use context::HtmlContext;
pub use status::{HandleStatus, StatusView};

/// Minify whitespace in text, inline scripts and styles.
pub const ZIP: &str = "zip";
/// Remove comment nodes (only while [`ZIP`] is enabled).
pub const NO_COMMENT: &str = "no-comment";
/// Rewrite `@/` asset references to fingerprinted URLs.
pub const LINK_ASSETS: &str = "link-assets";

/// A function applied to every node of a document.
pub type HtmlHandle = Arc<dyn Fn(&HtmlContext<'_>, &Path, &Handle) -> Result<()> + Send + Sync>;

/// One registered HTML handle.
#[derive(Clone)]
pub struct HtmlHandleEntry {
    pub id: String,
    pub handle: HtmlHandle,
    pub default_enabled: bool,
    pub aliases: Vec<String>,
}

impl std::fmt::Debug for HtmlHandleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlHandleEntry")
            .field("id", &self.id)
            .field("default_enabled", &self.default_enabled)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

/// Id-keyed HTML handles in registration order.
#[derive(Debug, Clone, Default)]
pub struct HtmlHandleRegistry {
    entries: Vec<HtmlHandleEntry>,
    index: FxHashMap<String, usize>,
    aliases: FxHashMap<String, String>,
}

impl HtmlHandleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in handles: zip, no-comment, link-assets.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register(ZIP, true, zip::zip, &["allow-zip"])
            .register(NO_COMMENT, true, comment::no_comment, &["disallow-comment"])
            .register(LINK_ASSETS, true, link::link_assets, &["allow-link-assets"]);
        registry
    }

    /// Register a handle under `id` with optional aliases.
    ///
    /// Re-registering an id replaces its entry but keeps its position.
    pub fn register<F>(
        &mut self,
        id: &str,
        default_enabled: bool,
        handle: F,
        aliases: &[&str],
    ) -> &mut Self
    where
        F: Fn(&HtmlContext<'_>, &Path, &Handle) -> Result<()> + Send + Sync + 'static,
    {
        let entry = HtmlHandleEntry {
            id: id.to_string(),
            handle: Arc::new(handle),
            default_enabled,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        };
        match self.index.get(id) {
            Some(&idx) => self.entries[idx] = entry,
            None => {
                self.index.insert(id.to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
        for alias in aliases {
            self.aliases.insert(alias.to_string(), id.to_string());
        }
        self
    }

    /// Canonical id for an id or alias.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        if let Some(&idx) = self.index.get(key) {
            return Some(&self.entries[idx].id);
        }
        let id = self.aliases.get(key)?;
        self.index.get(id).map(|&idx| self.entries[idx].id.as_str())
    }

    /// Handle and default flag for an id or alias.
    pub fn get(&self, key: &str) -> Option<(&HtmlHandle, bool)> {
        self.entry(key).map(|e| (&e.handle, e.default_enabled))
    }

    /// Entry for an id or alias.
    pub fn entry(&self, key: &str) -> Option<&HtmlHandleEntry> {
        let id = self.resolve(key)?;
        self.index.get(id).map(|&idx| &self.entries[idx])
    }

    /// Entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &HtmlHandleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
