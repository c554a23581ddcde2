//! Webloader - fingerprint static assets and rewrite markup to reference them.
//!
//! Two linkers mirror a source tree into a destination tree:
//!
//! - [`AssetsLinker`](linker::AssetsLinker) copies every file under a
//!   content-hashed name (`app.js` → `app@1f3a9c0e.js`)
//! - [`HtmlLinker`](linker::HtmlLinker) parses HTML documents, runs the
//!   enabled [handles](handle) over every node and writes them back
//!
//! ```ignore
//! use std::sync::Arc;
//! use webloader::handle::HtmlHandleRegistry;
//! use webloader::linker::{AssetsLinker, HtmlLinker};
//!
//! let registry = Arc::new(HtmlHandleRegistry::builtin());
//! let mut html = HtmlLinker::new(registry, "pages", "public", ["!zip"]);
//! html.set_assets_linker(AssetsLinker::new("assets", "public/assets"));
//! html.set_assets_prefix("/assets");
//! html.load()?;
//! ```

pub mod cli;
pub mod config;
pub mod dom;
pub mod handle;
pub mod linker;
pub mod logger;
pub mod utils;
