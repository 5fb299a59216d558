//! Replacing variable names with new values.

use regex::{NoExpand, Regex};
use tracing::trace;

use crate::error::Result;
use crate::marker::{self, TokenKind};

/// Ordered `variable name -> value` pairs for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueMapping {
    entries: Vec<(String, String)>,
}

impl ValueMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair `names` and `values` by position.
    ///
    /// Names without a value are left unmapped and surplus values are ignored.
    pub fn from_parallel<N, V>(names: &[N], values: &[V]) -> Self
    where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        names
            .iter()
            .zip(values)
            .fold(Self::new(), |mapping, (name, value)| {
                mapping.with(name.as_ref(), value.as_ref())
            })
    }

    /// Add or overwrite an entry. Overwriting keeps the original position.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or overwrite an entry. Overwriting keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value for `name`, if mapped.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Entries in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Replaces every literal occurrence of each mapped name with its value.
///
/// Entries are applied in order, each one seeing the output of the previous.
/// Marker delimiters are copied through untouched; marker content and all
/// other text are rewritten.
pub fn substitute(text: &str, mapping: &ValueMapping) -> Result<String> {
    let mut output = text.to_string();
    for (name, value) in mapping.iter() {
        if name.is_empty() {
            continue;
        }
        let regex = Regex::new(&regex::escape(name))?;
        output = replace_outside_delimiters(&output, &regex, value);
        trace!(name, value, "substituted variable");
    }
    Ok(output)
}

fn replace_outside_delimiters(text: &str, regex: &Regex, value: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut run = String::new();

    for token in marker::tokenize(text) {
        match token.kind {
            TokenKind::Text => run.push_str(token.raw),
            TokenKind::Open(_) | TokenKind::Close(_) => {
                output.push_str(&regex.replace_all(&run, NoExpand(value)));
                run.clear();
                output.push_str(token.raw);
            }
        }
    }
    output.push_str(&regex.replace_all(&run, NoExpand(value)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_globally() {
        let mapping = ValueMapping::new().with("userName", "first name");
        let out = substitute("userName and userName", &mapping).unwrap();
        assert_eq!(out, "first name and first name");
    }

    #[test]
    fn replaces_marker_content() {
        let mapping = ValueMapping::new().with("userName", "first name");
        let out = substitute("{{#camelCase}}userName{{/camelCase}}", &mapping).unwrap();
        assert_eq!(out, "{{#camelCase}}first name{{/camelCase}}");
    }

    #[test]
    fn never_rewrites_marker_names() {
        let mapping = ValueMapping::new().with("camel", "dromedary");
        let out = substitute("{{#camelCase}}camel{{/camelCase}}", &mapping).unwrap();
        assert_eq!(out, "{{#camelCase}}dromedary{{/camelCase}}");
    }

    #[test]
    fn metacharacters_in_names_are_literal() {
        let mapping = ValueMapping::new().with("a.b", "x");
        assert_eq!(substitute("a.b acb", &mapping).unwrap(), "x acb");
        let mapping = ValueMapping::new().with("(", "paren");
        assert_eq!(substitute("f(", &mapping).unwrap(), "fparen");
    }

    #[test]
    fn dollar_in_value_is_not_expanded() {
        let mapping = ValueMapping::new().with("price", "$1 $name");
        assert_eq!(substitute("price", &mapping).unwrap(), "$1 $name");
    }

    #[test]
    fn later_entries_see_earlier_results() {
        let mapping = ValueMapping::new().with("a", "b").with("b", "c");
        assert_eq!(substitute("a", &mapping).unwrap(), "c");
    }

    #[test]
    fn empty_name_is_skipped() {
        let mapping = ValueMapping::new().with("", "x");
        assert_eq!(substitute("abc", &mapping).unwrap(), "abc");
    }

    #[test]
    fn from_parallel_pairs_by_position() {
        let mapping = ValueMapping::from_parallel(&["a", "b", "c"], &["1", "2"]);
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("a"), Some("1"));
        assert_eq!(mapping.get("b"), Some("2"));
        assert_eq!(mapping.get("c"), None);

        let mapping = ValueMapping::from_parallel(&["a"], &["1", "2"]);
        assert_eq!(mapping.iter().collect::<Vec<_>>(), vec![("a", "1")]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mapping = ValueMapping::new().with("a", "1").with("b", "2").with("a", "3");
        assert_eq!(
            mapping.iter().collect::<Vec<_>>(),
            vec![("a", "3"), ("b", "2")]
        );
    }
}
