//! Piped stdin.

use std::sync::Arc;

use clap::ArgMatches;

use super::normalize;
use crate::env::{RealStdin, StdinReader};
use crate::source::{InputSource, SourceKind};
use crate::InputError;

/// Reads everything piped into the process.
///
/// Unavailable when stdin is a terminal, so `smappet copy` run
/// interactively never blocks waiting for input.
#[derive(Clone)]
pub struct StdinSource<R: StdinReader = RealStdin> {
    reader: Arc<R>,
    trim: bool,
}

impl StdinSource<RealStdin> {
    pub fn new() -> Self {
        Self::with_reader(RealStdin)
    }
}

impl Default for StdinSource<RealStdin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: StdinReader> StdinSource<R> {
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader: Arc::new(reader),
            trim: true,
        }
    }

    /// Strip surrounding whitespace (the default). Pass `false` to keep the
    /// text exactly as piped.
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl<R: StdinReader + 'static> InputSource<String> for StdinSource<R> {
    fn kind(&self) -> SourceKind {
        SourceKind::Stdin
    }

    fn is_available(&self, _matches: &ArgMatches) -> bool {
        !self.reader.is_terminal()
    }

    fn read(&self, _matches: &ArgMatches) -> Result<Option<String>, InputError> {
        if self.reader.is_terminal() {
            return Ok(None);
        }
        let text = self.reader.read_all().map_err(InputError::Stdin)?;
        Ok(normalize(text, self.trim))
    }
}
