//! Discovering which variables a template references.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TemplateError};
use crate::marker::{self, TokenKind};

static MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{#.*?\}\}(.*?)\{\{/.*?\}\}").expect("marker pattern is valid")
});

/// Returns the distinct marker contents in `text`, in order of first appearance.
///
/// Matching is purely structural: opening and closing names are not required
/// to agree. Use [`scan_strict`] to validate marker pairing.
pub fn scan(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    MARKER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Like [`scan`], but rejects unbalanced or mismatched markers.
///
/// Only pairs with no marker inside them report their text as a variable;
/// text around a nested pair belongs to no variable.
pub fn scan_strict(text: &str) -> Result<Vec<String>> {
    let mut stack: Vec<(&str, usize)> = Vec::new();
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    // Text since the last opening marker; `None` once any other marker follows.
    let mut content: Option<Option<std::ops::Range<usize>>> = None;

    for token in marker::tokenize(text) {
        match token.kind {
            TokenKind::Text => {
                if let Some(range) = content.as_mut() {
                    let start = range.as_ref().map_or(token.offset, |r| r.start);
                    *range = Some(start..token.span().end);
                }
            }
            TokenKind::Open(name) => {
                stack.push((name, token.offset));
                content = Some(None);
            }
            TokenKind::Close(name) => match stack.pop() {
                None => {
                    return Err(TemplateError::malformed(
                        token.offset,
                        format!("closing marker '{name}' has no opening marker"),
                    ))
                }
                Some((open, _)) if open != name => {
                    return Err(TemplateError::malformed(
                        token.offset,
                        format!("closing marker '{name}' does not match opening marker '{open}'"),
                    ))
                }
                Some(_) => {
                    if let Some(range) = content.take().flatten() {
                        let variable = &text[range];
                        if seen.insert(variable) {
                            names.push(variable.to_string());
                        }
                    }
                }
            },
        }
    }

    if let Some((name, offset)) = stack.pop() {
        return Err(TemplateError::malformed(
            offset,
            format!("opening marker '{name}' is never closed"),
        ));
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_names_in_first_seen_order() {
        let text = "{{#camelCase}}a{{/camelCase}} {{#snakeCase}}b{{/snakeCase}} {{#pascalCase}}a{{/pascalCase}}";
        assert_eq!(scan(text), vec!["a", "b"]);
    }

    #[test]
    fn no_markers_no_names() {
        assert!(scan("plain {{text}}").is_empty());
    }

    #[test]
    fn mismatched_names_still_scanned() {
        assert_eq!(scan("{{#camelCase}}x{{/snakeCase}}"), vec!["x"]);
    }

    #[test]
    fn strict_accepts_balanced_markers() {
        let text = "{{#camelCase}}a{{/camelCase}} and {{#snakeCase}}b{{/snakeCase}}";
        assert_eq!(scan_strict(text).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn strict_rejects_mismatch() {
        let err = scan_strict("{{#camelCase}}x{{/snakeCase}}").unwrap_err();
        assert!(matches!(err, TemplateError::MalformedMarker { offset: 15, .. }));
    }

    #[test]
    fn strict_rejects_orphan_close() {
        let err = scan_strict("x{{/camelCase}}").unwrap_err();
        assert!(matches!(err, TemplateError::MalformedMarker { offset: 1, .. }));
    }

    #[test]
    fn strict_rejects_unclosed_open() {
        let err = scan_strict("ab{{#camelCase}}x").unwrap_err();
        assert!(matches!(err, TemplateError::MalformedMarker { offset: 2, .. }));
    }

    #[test]
    fn strict_ignores_text_around_nested_markers() {
        let text = "{{#camelCase}}x{{#snakeCase}}y{{/snakeCase}}z{{/camelCase}}";
        assert_eq!(scan_strict(text).unwrap(), vec!["y"]);
    }

    #[test]
    fn strict_reports_innermost_content() {
        let text = "{{#camelCase}}{{#snakeCase}}a{{/snakeCase}}{{/camelCase}}";
        assert_eq!(scan_strict(text).unwrap(), vec!["a"]);
    }
}
