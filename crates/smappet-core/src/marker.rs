//! Marker syntax and tokenizer.
//!
//! A marker is `{{#name}}content{{/name}}`. The tokenizer splits text into
//! plain text, opening markers and closing markers. Anything else that starts
//! with `{{` (mustache variables, template literals in the captured code,
//! stray braces) is plain text.
//!
//! # Marker Name Syntax
//!
//! - Start with an ASCII letter or underscore
//! - Followed by ASCII letters, digits, underscores, hyphens or dots
//!
//! Pattern: `[A-Za-z_][A-Za-z0-9_.-]*`

use std::ops::Range;

const OPEN_PREFIX: &str = "{{#";
const CLOSE_PREFIX: &str = "{{/";
const SUFFIX: &str = "}}";

/// Render an opening marker for `name`.
pub fn open_tag(name: &str) -> String {
    format!("{OPEN_PREFIX}{name}{SUFFIX}")
}

/// Render a closing marker for `name`.
pub fn close_tag(name: &str) -> String {
    format!("{CLOSE_PREFIX}{name}{SUFFIX}")
}

/// Wrap `content` in a `name` marker.
pub fn wrap(name: &str, content: &str) -> String {
    format!("{}{}{}", open_tag(name), content, close_tag(name))
}

/// Token kinds produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind<'a> {
    /// Plain text content.
    Text,
    /// Opening marker: `{{#name}}`
    Open(&'a str),
    /// Closing marker: `{{/name}}`
    Close(&'a str),
}

/// A token together with its source slice and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub raw: &'a str,
    pub offset: usize,
}

impl Token<'_> {
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.raw.len()
    }
}

/// Tokenizer for `{{#name}}` / `{{/name}}` markers.
pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Checks if a string is a valid marker name.
    pub fn is_valid_name(s: &str) -> bool {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            return false;
        };

        if !first.is_ascii_alphabetic() && first != '_' {
            return false;
        }

        chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    }

    /// Parses a marker at the start of `s`, returning its kind and length.
    fn parse_marker(s: &'a str) -> Option<(TokenKind<'a>, usize)> {
        let (rest, open) = if let Some(rest) = s.strip_prefix(OPEN_PREFIX) {
            (rest, true)
        } else if let Some(rest) = s.strip_prefix(CLOSE_PREFIX) {
            (rest, false)
        } else {
            return None;
        };

        let end = rest.find(SUFFIX)?;
        let name = &rest[..end];
        if !Self::is_valid_name(name) {
            return None;
        }

        let len = OPEN_PREFIX.len() + end + SUFFIX.len();
        let kind = if open {
            TokenKind::Open(name)
        } else {
            TokenKind::Close(name)
        };
        Some((kind, len))
    }

    fn emit(&mut self, kind: TokenKind<'a>, len: usize) -> Token<'a> {
        let token = Token {
            kind,
            raw: &self.input[self.pos..self.pos + len],
            offset: self.pos,
        };
        self.pos += len;
        token
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let remaining = &self.input[self.pos..];

        match remaining.find("{{") {
            None => Some(self.emit(TokenKind::Text, remaining.len())),
            Some(0) => match Self::parse_marker(remaining) {
                Some((kind, len)) => Some(self.emit(kind, len)),
                // Not a marker: consume one brace so `{{{{#a}}` still finds `{{#a}}`
                None => Some(self.emit(TokenKind::Text, 1)),
            },
            Some(brace) => Some(self.emit(TokenKind::Text, brace)),
        }
    }
}

/// Tokenize `input` into a vector.
pub(crate) fn tokenize(input: &str) -> Vec<Token<'_>> {
    Tokenizer::new(input).collect()
}

/// Checks if there's a matching close marker in the remaining tokens.
pub(crate) fn has_matching_close(tokens: &[Token<'_>], name: &str) -> bool {
    let mut depth = 1;
    for token in tokens {
        match token.kind {
            TokenKind::Open(n) if n == name => depth += 1,
            TokenKind::Close(n) if n == name => {
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

/// A run of text that either may or may not be rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// Text outside any marker.
    Plain(&'a str),
    /// Marker tokens and everything enclosed by a balanced marker pair.
    Protected(&'a str),
}

/// Split `input` into plain and protected runs.
///
/// Concatenating the runs in order reproduces `input` exactly.
pub(crate) fn segments(input: &str) -> Vec<Segment<'_>> {
    let tokens = tokenize(input);
    let mut runs: Vec<(bool, Range<usize>)> = Vec::new();
    let mut stack: Vec<&str> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let protected = match token.kind {
            TokenKind::Text => !stack.is_empty(),
            TokenKind::Open(name) => {
                if has_matching_close(&tokens[i + 1..], name) {
                    stack.push(name);
                }
                true
            }
            TokenKind::Close(name) => {
                if let Some(pos) = stack.iter().rposition(|open| *open == name) {
                    stack.truncate(pos);
                }
                true
            }
        };

        match runs.last_mut() {
            Some((p, range)) if *p == protected => range.end = token.span().end,
            _ => runs.push((protected, token.span())),
        }
    }

    runs.into_iter()
        .map(|(protected, range)| {
            let text = &input[range];
            if protected {
                Segment::Protected(text)
            } else {
                Segment::Plain(text)
            }
        })
        .collect()
}
