//! Expanding markers back into cased text.
//!
//! Each `{{#name}}content{{/name}}` is replaced by the registered casing
//! `name` applied to the rendered content. Nested markers render inside-out.
//! Text outside markers, including `{{...}}` forms that are not markers, is
//! copied verbatim.

use serde::Deserialize;
use tracing::debug;

use crate::casing::Casing;
use crate::marker::{self, TokenKind};

/// What to do with a marker whose name is not a registered casing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownMarker {
    /// Render nothing, like a falsy template section.
    #[default]
    Empty,
    /// Render the content without the marker tags.
    Content,
    /// Leave the marker as it is.
    Keep,
}

/// An open marker waiting for its closing tag.
struct Frame<'a> {
    name: &'a str,
    open: &'a str,
    content: String,
}

/// Expands casing markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    unknown: UnknownMarker,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the behavior for unknown marker names.
    pub fn unknown_marker(mut self, behavior: UnknownMarker) -> Self {
        self.unknown = behavior;
        self
    }

    /// Renders every marker in `text`.
    ///
    /// Markers without a matching close render as literal text; a closing
    /// marker for an outer frame closes any frames opened inside it.
    pub fn render(&self, text: &str) -> String {
        let tokens = marker::tokenize(text);
        let mut output = String::with_capacity(text.len());
        let mut frames: Vec<Frame<'_>> = Vec::new();
        let mut unknown = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::Text => emit(&mut frames, &mut output, token.raw),
                TokenKind::Open(name) => {
                    if marker::has_matching_close(&tokens[i + 1..], name) {
                        frames.push(Frame {
                            name,
                            open: token.raw,
                            content: String::new(),
                        });
                    } else {
                        emit(&mut frames, &mut output, token.raw);
                    }
                }
                TokenKind::Close(name) => {
                    match frames.iter().rposition(|frame| frame.name == name) {
                        Some(pos) => {
                            while frames.len() > pos {
                                if let Some(frame) = frames.pop() {
                                    let rendered = self.expand(frame, &mut unknown);
                                    emit(&mut frames, &mut output, &rendered);
                                }
                            }
                        }
                        None => emit(&mut frames, &mut output, token.raw),
                    }
                }
            }
        }

        while let Some(frame) = frames.pop() {
            let rendered = self.expand(frame, &mut unknown);
            emit(&mut frames, &mut output, &rendered);
        }

        if unknown > 0 {
            debug!(unknown, behavior = ?self.unknown, "rendered unknown markers");
        }
        output
    }

    fn expand(&self, frame: Frame<'_>, unknown: &mut usize) -> String {
        if let Some(casing) = Casing::from_name(frame.name) {
            return casing.apply(&frame.content);
        }

        *unknown += 1;
        match self.unknown {
            UnknownMarker::Empty => String::new(),
            UnknownMarker::Content => frame.content,
            UnknownMarker::Keep => {
                format!(
                    "{}{}{}",
                    frame.open,
                    frame.content,
                    marker::close_tag(frame.name)
                )
            }
        }
    }
}

/// Appends `text` to the innermost open frame, or to the output.
fn emit(frames: &mut [Frame<'_>], output: &mut String, text: &str) {
    match frames.last_mut() {
        Some(frame) => frame.content.push_str(text),
        None => output.push_str(text),
    }
}

/// Renders `text` with the default unknown-marker behavior.
pub fn render(text: &str) -> String {
    Renderer::new().render(text)
}
