//! Error types for the templating engine.

use thiserror::Error;

/// Errors that can occur while tagging, scanning or rendering templates.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A variable name could not be compiled into a match pattern.
    #[error("invalid variable name: {0}")]
    InvalidVariable(#[from] regex::Error),

    /// A casing name is not part of the registry.
    #[error("unknown casing '{0}'")]
    UnknownCasing(String),

    /// Marker syntax is unbalanced or mismatched.
    #[error("malformed marker at byte {offset}: {reason}")]
    MalformedMarker { offset: usize, reason: String },

    /// Configuration could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TemplateError {
    /// Create a malformed marker error.
    pub fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedMarker {
            offset,
            reason: reason.into(),
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, TemplateError>;
