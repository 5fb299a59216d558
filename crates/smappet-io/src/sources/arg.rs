//! Values given as command line arguments.

use clap::ArgMatches;

use crate::source::{InputSource, SourceKind};
use crate::InputError;

/// Reads the string value of the clap argument with the given id.
#[derive(Debug, Clone)]
pub struct ArgSource {
    id: String,
}

impl ArgSource {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    fn value<'m>(&self, matches: &'m ArgMatches) -> Option<&'m String> {
        // An id the command doesn't define is treated like an absent argument.
        matches.try_get_one::<String>(&self.id).ok().flatten()
    }
}

impl InputSource<String> for ArgSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Arg
    }

    fn is_available(&self, matches: &ArgMatches) -> bool {
        self.value(matches).is_some()
    }

    fn read(&self, matches: &ArgMatches) -> Result<Option<String>, InputError> {
        Ok(self.value(matches).cloned())
    }
}
