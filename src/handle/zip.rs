//! `zip`: whitespace minification.

use std::path::Path;

use anyhow::Result;

use super::HtmlContext;
use crate::dom::{
    COMMENT, Handle, TEXT, attr, is_block_name, name, next_sibling, parent, prev_sibling,
    prev_sibling_except, set_attr, set_value, text, value,
};
use crate::utils::minify::{zip_css, zip_js, zip_string};

/// Neighbours that produce no visible whitespace of their own.
const SILENT_NEIGHBOURS: &[&str] = &[
    COMMENT, "script", "style", "br", "hr", "meta", "link", "input", "img",
];

/// Elements whose text is handled at the element level.
const CODE_ELEMENTS: &[&str] = &["script", "style"];

/// Elements whose whitespace is significant.
const PREFORMATTED: &[&str] = &["pre", "textarea"];

pub(super) fn zip(_: &HtmlContext<'_>, _: &Path, node: &Handle) -> Result<()> {
    match name(node) {
        TEXT => zip_text(node),
        "script" => set_value(node, &zip_js(&value(node))),
        "style" => set_value(node, zip_css(&value(node)).trim()),
        _ => {}
    }
    if let Some(style) = attr(node, "style") {
        set_attr(node, "style", &zip_css(&style));
    }
    Ok(())
}

fn zip_text(node: &Handle) {
    // Detached nodes (e.g. a replaced script body) are no longer rendered
    let Some(parent) = parent(node) else {
        return;
    };
    if CODE_ELEMENTS.contains(&name(&parent)) || is_preformatted(&parent) {
        return;
    }

    let mut zipped = zip_string(&value(node)).into_owned();
    if in_block_context(node, &parent) {
        zipped = zipped.trim().to_string();
    } else {
        if zipped.starts_with(' ') {
            let drop_leading = match prev_sibling_except(node, SILENT_NEIGHBOURS) {
                Some(before) => text(&before).chars().last().is_some_and(char::is_whitespace),
                None => true,
            };
            if drop_leading {
                zipped.remove(0);
            }
        }
        if zipped.ends_with(' ') && next_sibling(node).is_none() {
            zipped.pop();
        }
    }
    set_value(node, &zipped);
}

/// Parent is a block and every present neighbour is a block.
fn in_block_context(node: &Handle, parent: &Handle) -> bool {
    let is_block = |n: &Handle| is_block_name(name(n));
    is_block(parent)
        && prev_sibling(node).is_none_or(|n| is_block(&n))
        && next_sibling(node).is_none_or(|n| is_block(&n))
}

fn is_preformatted(start: &Handle) -> bool {
    let mut current = Some(start.clone());
    while let Some(node) = current {
        if PREFORMATTED.contains(&name(&node)) {
            return true;
        }
        current = parent(&node);
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::handle::testing::{body_of, run_builtin};

    const ZIP_ONLY: &str = "$zip: on; no-comment: off; link-assets: off";

    fn zip_only(html: &str) -> String {
        body_of(&run_builtin(html, ZIP_ONLY))
    }

    #[test]
    fn test_collapses_inline_text() {
        assert_eq!(zip_only("<span>a   b\n c</span>"), "<span>a b c</span>");
    }

    #[test]
    fn test_trims_block_text() {
        assert_eq!(zip_only("<div>\n   hello   world \n</div>"), "<div>hello world</div>");
        assert_eq!(zip_only("<ul>\n  <li> one </li>\n  <li>two</li>\n</ul>"), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn test_keeps_space_between_inline_elements() {
        assert_eq!(
            zip_only("<p>Hello   <b>big</b>   world  </p>"),
            "<p>Hello <b>big</b> world</p>"
        );
    }

    #[test]
    fn test_drops_leading_space_after_whitespace_text() {
        assert_eq!(zip_only("<p><b>x <br></b> z</p>"), "<p><b>x <br></b>z</p>");
        assert_eq!(zip_only("<p><br> b</p>"), "<p><br>b</p>");
        // `br` is skipped when looking back, `i` ends without whitespace
        assert_eq!(zip_only("<p><i>a</i><br> b</p>"), "<p><i>a</i><br> b</p>");
    }

    #[test]
    fn test_minifies_script_and_style() {
        // Both land in <head>
        let out = run_builtin("<style>\n  p {\n    color:  red;\n  }\n</style><script>\n  let a = 1;\n  // keep\n  a++;\n</script>", ZIP_ONLY);
        assert!(out.contains("<style>p { color: red; }</style>"), "{out}");
        assert!(out.contains("<script>let a = 1;\n  // keep\n  a++;</script>"), "{out}");
    }

    #[test]
    fn test_style_attribute() {
        assert_eq!(
            zip_only("<span style=\"color:  red;\n  margin: 0\">x</span>"),
            "<span style=\"color: red; margin: 0\">x</span>"
        );
    }

    #[test]
    fn test_preformatted_untouched() {
        assert_eq!(zip_only("<pre>  a\n   b</pre>"), "<pre>  a\n   b</pre>");
        assert_eq!(
            zip_only("<pre><code>x    y</code></pre>"),
            "<pre><code>x    y</code></pre>"
        );
    }
}
