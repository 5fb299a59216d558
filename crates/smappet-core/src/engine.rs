//! The capture and apply pipelines.
//!
//! ```text
//! capture: selection + "a, b"  → Tagger → template
//! apply:   template + "x, y"   → scan → substitute → render → text
//! ```
//!
//! Absent inputs (no selection, a cancelled prompt) are not errors: the
//! pipelines return `Ok(None)` and the caller performs no side effect.

use tracing::{debug, info};

use crate::casing::Casing;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::render::{Renderer, UnknownMarker};
use crate::scanner;
use crate::substitute::{substitute, ValueMapping};
use crate::tagger::Tagger;

/// Split a comma-separated list of variable names, trimming each and
/// dropping empty entries.
pub fn parse_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated list of values. Values are kept as typed.
pub fn parse_values(list: &str) -> Vec<String> {
    list.split(',').map(str::to_string).collect()
}

/// Casing-aware template engine.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    tagger: Tagger,
    renderer: Renderer,
}

impl Engine {
    /// Creates an engine with every registered casing and default rendering.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new()
            .casings(config.casings.clone())
            .unknown_marker(config.unknown_markers)
    }

    /// Restricts tagging to `casings`, tried in the given order.
    pub fn casings(mut self, casings: Vec<Casing>) -> Self {
        self.tagger = Tagger::new(casings);
        self
    }

    /// Sets the fallback for markers naming no registered casing.
    pub fn unknown_marker(mut self, behavior: UnknownMarker) -> Self {
        self.renderer = self.renderer.unknown_marker(behavior);
        self
    }

    /// Turns a selection into a template.
    ///
    /// `variables` is the raw comma-separated answer to the variable prompt.
    pub fn capture(&self, selection: Option<&str>, variables: Option<&str>) -> Result<Option<String>> {
        let (Some(selection), Some(variables)) = (selection, variables) else {
            debug!(
                has_selection = selection.is_some(),
                has_variables = variables.is_some(),
                "nothing to capture"
            );
            return Ok(None);
        };

        let names = parse_names(variables);
        let template = self.tagger.tag(selection, &names)?;
        info!(variables = ?names, "captured template");
        Ok(Some(template))
    }

    /// Variable names referenced by `template`, in order of first appearance.
    pub fn variables(&self, template: &str) -> Vec<String> {
        scanner::scan(template)
    }

    /// Expands a template with new values.
    ///
    /// `values` is the raw comma-separated answer to the value prompt, paired
    /// by position with [`variables`](Self::variables). Without values the
    /// markers still render, using the variable names themselves.
    pub fn apply(&self, template: Option<&str>, values: Option<&str>) -> Result<Option<String>> {
        let Some(template) = template else {
            debug!("no template to apply");
            return Ok(None);
        };

        let names = self.variables(template);
        let values = values.map(parse_values).unwrap_or_default();
        let mapping = ValueMapping::from_parallel(&names, &values);
        let rendered = self.apply_mapping(template, &mapping)?;
        info!(variables = ?names, mapped = mapping.len(), "applied template");
        Ok(Some(rendered))
    }

    /// Substitutes `mapping` into `template` and renders the markers.
    pub fn apply_mapping(&self, template: &str, mapping: &ValueMapping) -> Result<String> {
        let substituted = substitute(template, mapping)?;
        Ok(self.renderer.render(&substituted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_trims_and_drops_empty() {
        assert_eq!(parse_names(" userName, itemId ,, "), vec!["userName", "itemId"]);
        assert!(parse_names("").is_empty());
    }

    #[test]
    fn parse_values_keeps_whitespace() {
        assert_eq!(parse_values("first name, id"), vec!["first name", " id"]);
    }

    #[test]
    fn capture_without_selection_is_none() {
        let engine = Engine::new();
        assert_eq!(engine.capture(None, Some("userName")).unwrap(), None);
    }

    #[test]
    fn capture_without_variables_is_none() {
        let engine = Engine::new();
        assert_eq!(engine.capture(Some("let userName;"), None).unwrap(), None);
    }

    #[test]
    fn capture_tags_selection() {
        let engine = Engine::new().casings(vec![Casing::Camel, Casing::Constant]);
        let out = engine
            .capture(Some("const USER_NAME = userName;"), Some("userName"))
            .unwrap();
        assert_eq!(
            out.as_deref(),
            Some("const {{#constantCase}}userName{{/constantCase}} = {{#camelCase}}userName{{/camelCase}};")
        );
    }

    #[test]
    fn apply_without_template_is_none() {
        assert_eq!(Engine::new().apply(None, Some("x")).unwrap(), None);
    }

    #[test]
    fn apply_renders_values() {
        let template =
            "const {{#camelCase}}userName{{/camelCase}} = {{#constantCase}}userName{{/constantCase}};";
        let out = Engine::new().apply(Some(template), Some("first name")).unwrap();
        assert_eq!(out.as_deref(), Some("const firstName = FIRST_NAME;"));
    }

    #[test]
    fn apply_without_values_renders_names() {
        let template = "{{#snakeCase}}userName{{/snakeCase}}";
        let out = Engine::new().apply(Some(template), None).unwrap();
        assert_eq!(out.as_deref(), Some("user_name"));
    }

    #[test]
    fn apply_pairs_values_by_position() {
        let template = "{{#pascalCase}}a{{/pascalCase}}.{{#snakeCase}}b{{/snakeCase}}";
        let out = Engine::new().apply(Some(template), Some("order item,unit price")).unwrap();
        assert_eq!(out.as_deref(), Some("OrderItem.unit_price"));
    }

    #[test]
    fn config_controls_unknown_markers() {
        let config = EngineConfig {
            unknown_markers: UnknownMarker::Content,
            ..EngineConfig::default()
        };
        let engine = Engine::from_config(&config);
        let out = engine.apply(Some("{{#shout}}x{{/shout}}"), Some("hey")).unwrap();
        assert_eq!(out.as_deref(), Some("hey"));
    }
}
