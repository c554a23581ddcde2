//! Markup documents as mutable node trees.
//!
//! Parsing and serialization go through html5ever with an `RcDom` sink,
//! which gives reference-counted nodes with parent links, so handles can
//! freely navigate and detach nodes in place.
//!
//! - [`parse_document`]: bytes → `RcDom` (input must be UTF-8)
//! - [`serialize_document`]: `RcDom` → bytes
//! - [`node`]: name/value/attribute/navigation helpers over a [`Handle`]

pub mod node;

use std::io::{self, Write};

use html5ever::parse_document as parse_html5;
use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::SerializableHandle;

pub use markup5ever_rcdom::{Handle, NodeData, RcDom};
pub use node::{
    COMMENT, DOCTYPE, DOCUMENT, PROCESSING_INSTRUCTION, TEXT, attr, descendants,
    is_block_name, name, next_sibling, parent, prev_sibling, prev_sibling_except, remove, set_attr,
    set_value, text, value,
};

/// Parse UTF-8 markup into a node tree.
///
/// html5ever recovers from any malformed markup, so the only failure is
/// input that is not valid UTF-8.
pub fn parse_document(html: &[u8]) -> Result<RcDom, std::str::Utf8Error> {
    let text = std::str::from_utf8(html)?;
    Ok(parse_html5(RcDom::default(), Default::default()).one(text))
}

/// Serialize a whole document (doctype, comments and root element).
pub fn serialize_document(dom: &RcDom, writer: impl Write) -> io::Result<()> {
    let document: SerializableHandle = dom.document.clone().into();
    serialize(
        writer,
        &document,
        SerializeOpts {
            traversal_scope: TraversalScope::ChildrenOnly(None),
            ..Default::default()
        },
    )
}

/// Serialize a document to a `String`.
pub fn to_html(dom: &RcDom) -> io::Result<String> {
    let mut out = Vec::new();
    serialize_document(dom, &mut out)?;
    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// The `<html>` element of a document.
pub fn html_element(dom: &RcDom) -> Option<Handle> {
    dom.document
        .children
        .borrow()
        .iter()
        .find(|child| name(child) == "html")
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repairs_fragments() {
        let dom = parse_document(b"<p>hello").unwrap();
        let html = html_element(&dom).unwrap();
        let names: Vec<_> = descendants(&html).iter().map(|n| name(n).to_string()).collect();
        assert_eq!(names, ["head", "body", "p", "#text"]);
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        assert!(parse_document(b"<p>\xff\xfe</p>").is_err());
    }

    #[test]
    fn test_serialize_keeps_doctype_and_comments() {
        let dom = parse_document(b"<!DOCTYPE html><!-- top --><html><body>x</body></html>").unwrap();
        let out = to_html(&dom).unwrap();
        assert!(out.starts_with("<!DOCTYPE html><!-- top --><html>"));
        assert!(out.contains("<body>x</body>"));
    }
}
