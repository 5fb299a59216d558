//! Turning concrete text into a template.
//!
//! The [`Tagger`] finds every casing variant of the declared variables and
//! wraps it in a marker whose content is the variable name itself:
//!
//! ```text
//! variables: [userName]
//! input:     const USER_NAME = userName;
//! output:    const {{#constantCase}}userName{{/constantCase}} = {{#camelCase}}userName{{/camelCase}};
//! ```
//!
//! All variants are matched in a single pass over the text outside existing
//! markers. Candidates are ordered by variable declaration order, then casing
//! order, and at any position the first candidate that matches wins. Text
//! inside markers is never touched, so tagging is idempotent.

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use crate::casing::Casing;
use crate::error::Result;
use crate::marker::{self, Segment};

/// One variant to look for and the marker it becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    variant: String,
    replacement: String,
}

/// Wraps casing variants of known variables in markers.
#[derive(Debug, Clone)]
pub struct Tagger {
    casings: Vec<Casing>,
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new(Casing::ALL.to_vec())
    }
}

impl Tagger {
    /// Creates a tagger that tries `casings` in the given order.
    pub fn new(casings: Vec<Casing>) -> Self {
        Self { casings }
    }

    /// The casings this tagger tries, in priority order.
    pub fn casings(&self) -> &[Casing] {
        &self.casings
    }

    /// Tags every occurrence of every variable variant in `text`.
    pub fn tag<S: AsRef<str>>(&self, text: &str, variables: &[S]) -> Result<String> {
        let candidates = self.candidates(variables);
        if candidates.is_empty() {
            return Ok(text.to_string());
        }

        let pattern = candidates
            .iter()
            .map(|c| regex::escape(&c.variant))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&pattern)?;

        // Leftmost-first alternation picks the earliest listed alternative, so
        // the first candidate with the matched text is the one that matched.
        let mut by_variant: HashMap<&str, &str> = HashMap::new();
        for candidate in &candidates {
            by_variant
                .entry(candidate.variant.as_str())
                .or_insert(candidate.replacement.as_str());
        }

        let mut output = String::with_capacity(text.len());
        let mut wrapped = 0usize;
        for segment in marker::segments(text) {
            match segment {
                Segment::Protected(s) => output.push_str(s),
                Segment::Plain(s) => {
                    let mut last = 0;
                    for m in regex.find_iter(s) {
                        output.push_str(&s[last..m.start()]);
                        output.push_str(by_variant[m.as_str()]);
                        last = m.end();
                        wrapped += 1;
                    }
                    output.push_str(&s[last..]);
                }
            }
        }

        debug!(
            variables = variables.len(),
            candidates = candidates.len(),
            wrapped,
            "tagged text"
        );
        Ok(output)
    }

    fn candidates<S: AsRef<str>>(&self, variables: &[S]) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        for variable in variables {
            let variable = variable.as_ref();
            if variable.is_empty() {
                continue;
            }
            for casing in &self.casings {
                let variant = casing.apply(variable);
                if variant.is_empty() {
                    continue;
                }
                candidates.push(Candidate {
                    variant,
                    replacement: marker::wrap(casing.name(), variable),
                });
            }
        }
        candidates
    }
}

/// Tags `text` with the given variables and casings.
pub fn tag<S: AsRef<str>>(text: &str, variables: &[S], casings: &[Casing]) -> Result<String> {
    Tagger::new(casings.to_vec()).tag(text, variables)
}
