//! Node helpers over `markup5ever_rcdom::Handle`.
//!
//! Every node has a name: the element's local name, or one of the
//! sentinels [`TEXT`], [`COMMENT`], [`DOCUMENT`], [`DOCTYPE`],
//! [`PROCESSING_INSTRUCTION`].

use std::cell::RefCell;
use std::rc::Rc;

use html5ever::tendril::StrTendril;
use html5ever::{Attribute, LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData};

pub const TEXT: &str = "#text";
pub const COMMENT: &str = "#comment";
pub const DOCUMENT: &str = "#document";
pub const DOCTYPE: &str = "#doctype";
pub const PROCESSING_INSTRUCTION: &str = "#pi";

/// Elements that lay out as blocks: whitespace at their edges never renders.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "dd", "details", "dialog", "div", "dl",
    "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "head", "header", "hgroup", "hr", "html", "li", "main", "nav", "ol", "p", "section", "summary",
    "table", "tbody", "td", "tfoot", "th", "thead", "title", "tr", "ul",
];

/// Whether `name` is a block-level element name.
#[inline]
pub fn is_block_name(name: &str) -> bool {
    BLOCK_ELEMENTS.contains(&name)
}

/// Name of a node.
pub fn name(node: &Handle) -> &str {
    match &node.data {
        NodeData::Element { name, .. } => &*name.local,
        NodeData::Text { .. } => TEXT,
        NodeData::Comment { .. } => COMMENT,
        NodeData::Document => DOCUMENT,
        NodeData::Doctype { .. } => DOCTYPE,
        NodeData::ProcessingInstruction { .. } => PROCESSING_INSTRUCTION,
    }
}

/// Textual value of a node.
///
/// Text and comment nodes yield their contents; elements yield the
/// concatenation of their direct text children (a `<script>` or `<style>`
/// body); other nodes yield an empty string.
pub fn value(node: &Handle) -> String {
    match &node.data {
        NodeData::Text { contents } => contents.borrow().to_string(),
        NodeData::Comment { contents } => contents.to_string(),
        NodeData::Element { .. } => node
            .children
            .borrow()
            .iter()
            .filter_map(|child| match &child.data {
                NodeData::Text { contents } => Some(contents.borrow().to_string()),
                _ => None,
            })
            .collect(),
        _ => String::new(),
    }
}

/// Replace the textual value of a node.
///
/// Text nodes are updated in place. Elements lose all their children and
/// receive a single text child (none if `value` is empty). Comments and
/// other nodes are left untouched.
pub fn set_value(node: &Handle, value: &str) {
    match &node.data {
        NodeData::Text { contents } => {
            *contents.borrow_mut() = StrTendril::from(value);
        }
        NodeData::Element { .. } => {
            let old = std::mem::take(&mut *node.children.borrow_mut());
            for child in &old {
                child.parent.set(None);
            }
            if !value.is_empty() {
                let child = Node::new(NodeData::Text {
                    contents: RefCell::new(StrTendril::from(value)),
                });
                child.parent.set(Some(Rc::downgrade(node)));
                node.children.borrow_mut().push(child);
            }
        }
        _ => {}
    }
}

/// Full text content of a node and its descendants.
pub fn text(node: &Handle) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(node: &Handle, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Comment { contents } => out.push_str(contents),
        _ => {
            for child in node.children.borrow().iter() {
                collect_text(child, out);
            }
        }
    }
}

/// Attribute value by local name.
pub fn attr(node: &Handle, key: &str) -> Option<String> {
    let NodeData::Element { attrs, .. } = &node.data else {
        return None;
    };
    attrs
        .borrow()
        .iter()
        .find(|a| &*a.name.local == key)
        .map(|a| a.value.to_string())
}

/// Set an attribute, replacing an existing value or appending a new one.
///
/// No-op on non-element nodes.
pub fn set_attr(node: &Handle, key: &str, value: &str) {
    let NodeData::Element { attrs, .. } = &node.data else {
        return;
    };
    let mut attrs = attrs.borrow_mut();
    match attrs.iter_mut().find(|a| &*a.name.local == key) {
        Some(existing) => existing.value = StrTendril::from(value),
        None => attrs.push(Attribute {
            name: QualName::new(None, Namespace::from(""), LocalName::from(key)),
            value: StrTendril::from(value),
        }),
    }
}

/// Parent of a node, if still attached.
pub fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(|w| w.upgrade());
    node.parent.set(weak);
    parent
}

/// Position of `node` among its parent's children.
fn sibling_index(parent: &Handle, node: &Handle) -> Option<usize> {
    parent
        .children
        .borrow()
        .iter()
        .position(|child| Rc::ptr_eq(child, node))
}

/// Next sibling of a node.
pub fn next_sibling(node: &Handle) -> Option<Handle> {
    let parent = parent(node)?;
    let idx = sibling_index(&parent, node)?;
    let next = parent.children.borrow().get(idx + 1).cloned();
    next
}

/// Previous sibling of a node.
pub fn prev_sibling(node: &Handle) -> Option<Handle> {
    let parent = parent(node)?;
    let idx = sibling_index(&parent, node)?.checked_sub(1)?;
    let prev = parent.children.borrow().get(idx).cloned();
    prev
}

/// Closest previous sibling whose name is not in `skip`.
pub fn prev_sibling_except(node: &Handle, skip: &[&str]) -> Option<Handle> {
    let parent = parent(node)?;
    let idx = sibling_index(&parent, node)?;
    let children = parent.children.borrow();
    let found = children[..idx]
        .iter()
        .rev()
        .find(|sibling| !skip.contains(&name(sibling)))
        .cloned();
    found
}

/// Detach a node from its parent. No-op for detached nodes.
pub fn remove(node: &Handle) {
    if let Some(parent) = parent(node) {
        parent
            .children
            .borrow_mut()
            .retain(|child| !Rc::ptr_eq(child, node));
    }
    node.parent.set(None);
}

/// All descendants of a node in depth-first pre-order (the node excluded).
///
/// Returns a snapshot, so callers may detach nodes while iterating.
pub fn descendants(node: &Handle) -> Vec<Handle> {
    let mut out = Vec::new();
    let mut stack: Vec<Handle> = node.children.borrow().iter().rev().cloned().collect();
    while let Some(current) = stack.pop() {
        stack.extend(current.children.borrow().iter().rev().cloned());
        out.push(current);
    }
    out
}
