//! Engine configuration.

use std::path::Path;

use serde::Deserialize;

use crate::casing::Casing;
use crate::error::{Result, TemplateError};
use crate::render::UnknownMarker;

/// Settings that shape tagging and rendering.
///
/// ```yaml
/// casings: [camelCase, pascalCase, snakeCase]
/// unknown_markers: content
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Casings tried while tagging, in priority order.
    pub casings: Vec<Casing>,
    /// Fallback for markers that name no registered casing.
    pub unknown_markers: UnknownMarker,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            casings: Casing::ALL.to_vec(),
            unknown_markers: UnknownMarker::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).map_err(|e| TemplateError::Config(e.to_string()))
    }

    /// Read and parse a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| TemplateError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&source)
    }
}
