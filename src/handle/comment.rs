//! `no-comment`: comment removal.

use std::path::Path;

use anyhow::Result;

use super::{HtmlContext, ZIP};
use crate::dom::{COMMENT, Handle, name, remove};

/// Comments are only dropped while `zip` is enabled for the document.
pub(super) fn no_comment(ctx: &HtmlContext<'_>, _: &Path, node: &Handle) -> Result<()> {
    if ctx.is_enabled(ZIP) && name(node) == COMMENT {
        remove(node);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::handle::testing::{body_of, run_builtin};

    const DOC: &str = "<p>a<!-- note -->b</p>";

    #[test]
    fn test_removes_comments_with_zip() {
        assert_eq!(body_of(&run_builtin(DOC, "$link-assets: off")), "<p>ab</p>");
    }

    #[test]
    fn test_zip_disabled_keeps_comments() {
        // no-comment is on, but without zip the comment stays
        let out = body_of(&run_builtin(DOC, "$zip: off; no-comment: on"));
        assert_eq!(out, "<p>a<!-- note -->b</p>");
    }

    #[test]
    fn test_no_comment_disabled() {
        let out = body_of(&run_builtin(DOC, "$zip: on; disallow-comment: no"));
        assert_eq!(out, "<p>a<!-- note -->b</p>");
    }
}
