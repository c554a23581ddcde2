//! `link-assets`: rewrite `@/` references to fingerprinted asset URLs.
//!
//! | Element         | Attribute |
//! |-----------------|-----------|
//! | `a`, `link`     | `href`    |
//! | `img`, `script` | `src`     |
//!
//! `@/img/logo.png` is looked up as `img/logo.png`; a hit becomes
//! `<assets prefix><fingerprinted path>`. Misses are left untouched.

use std::path::Path;

use anyhow::Result;

use super::HtmlContext;
use crate::dom::{Handle, attr, name, set_attr};

/// Prefix marking an attribute value as an asset reference.
pub const ASSET_REF_PREFIX: &str = "@/";

pub(super) fn link_assets(ctx: &HtmlContext<'_>, _: &Path, node: &Handle) -> Result<()> {
    let key = match name(node) {
        "a" | "link" => "href",
        "img" | "script" => "src",
        _ => return Ok(()),
    };
    let Some(reference) = attr(node, key) else {
        return Ok(());
    };
    let Some(rel) = reference.strip_prefix(ASSET_REF_PREFIX) else {
        return Ok(());
    };
    if let Some(target) = ctx.asset_path(rel) {
        set_attr(node, key, &format!("{}{}", ctx.assets_prefix(), target));
    }
    Ok(())
}
