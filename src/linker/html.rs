//! Markup rewriter.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use super::{AssetsLinker, LinkError, create_dir, require_dir};
use crate::dom::{
    COMMENT, RcDom, descendants, html_element, name, parse_document, serialize_document, value,
};
use crate::handle::directive::{parse_bool, parse_directive};
use crate::handle::{HandleStatus, HtmlContext, HtmlHandleRegistry, StatusView};
use crate::utils::walk::walk;
use crate::{debug, log};

/// File extensions treated as markup (ASCII case-insensitive).
const MARKUP_EXTENSIONS: &[&str] = &["html", "htm"];

/// Mirrors a markup tree, running every enabled HTML handle over each
/// document. Files that are not markup are not copied.
#[derive(Debug)]
pub struct HtmlLinker {
    registry: Arc<HtmlHandleRegistry>,
    src: PathBuf,
    dst: PathBuf,
    status: HandleStatus,
    assets: Option<AssetsLinker>,
    assets_prefix: String,
}

impl HtmlLinker {
    /// Create a linker with handle defaults adjusted by `toggles`.
    ///
    /// `!id` disables, a bare id enables; aliases are accepted and unknown
    /// tokens are ignored.
    pub fn new<I, S>(
        registry: Arc<HtmlHandleRegistry>,
        src: impl Into<PathBuf>,
        dst: impl Into<PathBuf>,
        toggles: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut status = HandleStatus::seeded(&registry);
        for token in toggles {
            let token = token.as_ref();
            if !status.apply_toggle(&registry, token) {
                debug!("html"; "ignoring unknown handle toggle `{}`", token);
            }
        }
        Self {
            registry,
            src: src.into(),
            dst: dst.into(),
            status,
            assets: None,
            assets_prefix: String::new(),
        }
    }

    /// Link the attached assets (if any), then rewrite every document.
    pub fn load(&mut self) -> Result<()> {
        if let Some(assets) = self.assets.as_mut() {
            assets.load()?;
        }

        require_dir(&self.src)?;
        create_dir(&self.dst)?;

        let mut documents = 0usize;
        for entry in walk(&self.src) {
            let entry = entry.map_err(LinkError::Walk)?;
            let dst = self.dst.join(&entry.rel);
            if entry.is_dir() {
                create_dir(&dst)?;
                continue;
            }
            if !is_markup(&entry.name) {
                debug!("html"; "skip {}", entry.rel_slash());
                continue;
            }
            self.link_document(&entry.path, &dst)?;
            debug!("html"; "{}", entry.rel_slash());
            documents += 1;
        }

        log!("html"; "linked {} documents into {}", documents, self.dst.display());
        Ok(())
    }

    fn link_document(&self, src: &Path, dst: &Path) -> Result<()> {
        let bytes = fs::read(src).map_err(LinkError::io(src))?;
        let dom = parse_document(&bytes).map_err(|e| LinkError::Parse {
            path: src.to_path_buf(),
            message: e.to_string(),
        })?;

        self.fix_doc(src, &dom)?;

        let mut out = Vec::with_capacity(bytes.len());
        serialize_document(&dom, &mut out).map_err(LinkError::io(dst))?;
        fs::write(dst, out).map_err(LinkError::io(dst))?;
        Ok(())
    }

    /// Run the enabled handles over one parsed document.
    ///
    /// Directive comments anywhere in the document override enablement for
    /// this call only. Every descendant of `<html>` is visited in pre-order,
    /// and each enabled handle runs once per node in registration order.
    pub fn fix_doc(&self, path: &Path, dom: &RcDom) -> Result<()> {
        let mut view = self.status.view(&self.registry);
        apply_directives(&mut view, dom);

        let Some(root) = html_element(dom) else {
            return Ok(());
        };
        let handles = view.enabled_handles();
        if handles.is_empty() {
            return Ok(());
        }

        let ctx = HtmlContext::new(&view, self.assets.as_ref(), &self.assets_prefix);
        for node in descendants(&root) {
            for (id, handle) in &handles {
                handle(&ctx, path, &node).map_err(|source| LinkError::Handle {
                    id: id.to_string(),
                    path: path.to_path_buf(),
                    source: source.into(),
                })?;
            }
        }
        Ok(())
    }

    /// Whether a handle (id or alias) is enabled. `false` when unknown.
    pub fn handle_status(&self, key: &str) -> bool {
        self.status.get(&self.registry, key)
    }

    /// Enable or disable a handle (id or alias). Unknown keys are ignored.
    pub fn set_handle_status(&mut self, key: &str, enabled: bool) {
        if !self.status.set(&self.registry, key, enabled) {
            debug!("html"; "ignoring unknown handle `{}`", key);
        }
    }

    pub fn set_assets_linker(&mut self, assets: AssetsLinker) {
        self.assets = Some(assets);
    }

    pub fn assets_linker(&self) -> Option<&AssetsLinker> {
        self.assets.as_ref()
    }

    pub fn assets_linker_mut(&mut self) -> Option<&mut AssetsLinker> {
        self.assets.as_mut()
    }

    /// Set the URL prefix for rewritten asset references.
    ///
    /// A trailing `/` is appended to non-empty prefixes that lack one.
    pub fn set_assets_prefix(&mut self, prefix: impl Into<String>) {
        let mut prefix = prefix.into();
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }
        self.assets_prefix = prefix;
    }

    pub fn assets_prefix(&self) -> &str {
        &self.assets_prefix
    }

    pub fn registry(&self) -> &Arc<HtmlHandleRegistry> {
        &self.registry
    }

    pub fn src(&self) -> &Path {
        &self.src
    }

    pub fn dst(&self) -> &Path {
        &self.dst
    }
}

/// Apply every directive comment in the document to `view`.
fn apply_directives(view: &mut StatusView<'_>, dom: &RcDom) {
    for node in descendants(&dom.document) {
        if name(&node) != COMMENT {
            continue;
        }
        let text = value(&node);
        let Some(clauses) = parse_directive(&text) else {
            continue;
        };
        for (key, flag) in clauses {
            if !view.set_override(key, parse_bool(flag)) {
                debug!("html"; "ignoring unknown directive key `{}`", key);
            }
        }
    }
}

fn is_markup(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKUP_EXTENSIONS
                .iter()
                .any(|m| ext.eq_ignore_ascii_case(m))
        })
}
