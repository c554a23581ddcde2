//! In-document directive comments.
//!
//! A comment whose text starts with `$` overrides handle enablement for the
//! document it appears in:
//!
//! ```html
//! <!--$zip: false; allow-link-assets: yes-->
//! ```
//!
//! Clauses are `;`-separated `key: value` pairs. A clause without `:` ends
//! parsing of that comment.

/// Marker that opens a directive comment.
pub const DIRECTIVE_MARKER: char = '$';

/// Parse a comment's text into `(key, value)` clauses.
///
/// Returns `None` when the comment is not a directive.
pub fn parse_directive(comment: &str) -> Option<Vec<(&str, &str)>> {
    let body = comment.strip_prefix(DIRECTIVE_MARKER)?;
    let mut clauses = Vec::new();
    for clause in body.split(';') {
        let Some((key, value)) = clause.split_once(':') else {
            break;
        };
        clauses.push((key.trim(), value.trim()));
    }
    Some(clauses)
}

/// Parse a boolean token: `TRUE`, `T`, `OK`, `YES`, `1` (any case) are true.
pub fn parse_bool(value: &str) -> bool {
    ["TRUE", "T", "OK", "YES", "1"]
        .iter()
        .any(|token| value.eq_ignore_ascii_case(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_directive() {
        assert_eq!(parse_directive(" plain comment"), None);
        assert_eq!(parse_directive(" $zip: false"), None);
    }

    #[test]
    fn test_clauses_are_trimmed() {
        let clauses = parse_directive("$ zip : false ;no-comment:yes").unwrap();
        assert_eq!(clauses, [("zip", "false"), ("no-comment", "yes")]);
    }

    #[test]
    fn test_clause_without_colon_stops() {
        let clauses = parse_directive("$zip: off; broken; link-assets: off").unwrap();
        assert_eq!(clauses, [("zip", "off")]);

        // A trailing `;` leaves an empty clause, which also stops parsing
        let clauses = parse_directive("$zip: 1;").unwrap();
        assert_eq!(clauses, [("zip", "1")]);
    }

    #[test]
    fn test_value_keeps_inner_colons() {
        let clauses = parse_directive("$key: a:b").unwrap();
        assert_eq!(clauses, [("key", "a:b")]);
    }

    #[test]
    fn test_parse_bool() {
        for token in ["TRUE", "true", "T", "t", "ok", "Yes", "1"] {
            assert!(parse_bool(token), "{token}");
        }
        for token in ["false", "0", "no", "on", "", "yes please"] {
            assert!(!parse_bool(token), "{token}");
        }
    }
}
