//! Whitespace minification for text, inline CSS and inline JS.
//!
//! Runs of whitespace are collapsed and nothing is parsed. Inline script
//! bodies are only trimmed, as newlines can be significant there.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static whitespace regex"));

/// Collapse every run of whitespace into a single space.
pub fn zip_string(text: &str) -> Cow<'_, str> {
    if text.is_empty() {
        return Cow::Borrowed(text);
    }
    WHITESPACE_RUN.replace_all(text, " ")
}

/// Minify an inline script body.
pub fn zip_js(source: &str) -> String {
    source.trim().to_string()
}

/// Minify an inline style body or a `style` attribute value.
pub fn zip_css(source: &str) -> String {
    zip_string(source).into_owned()
}
