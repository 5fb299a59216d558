//! Clipboard text.

use std::sync::Arc;

use clap::ArgMatches;

use super::normalize;
use crate::env::{ClipboardReader, SystemClipboard};
use crate::source::{InputSource, SourceKind};
use crate::InputError;

/// Reads the clipboard. Text is kept verbatim unless `trim(true)` is set.
#[derive(Clone)]
pub struct ClipboardSource<R: ClipboardReader = SystemClipboard> {
    reader: Arc<R>,
    trim: bool,
}

impl ClipboardSource<SystemClipboard> {
    pub fn new() -> Self {
        Self::with_reader(SystemClipboard::new())
    }
}

impl Default for ClipboardSource<SystemClipboard> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ClipboardReader> ClipboardSource<R> {
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader: Arc::new(reader),
            trim: false,
        }
    }

    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl<R: ClipboardReader + 'static> InputSource<String> for ClipboardSource<R> {
    fn kind(&self) -> SourceKind {
        SourceKind::Clipboard
    }

    /// Always available. An empty clipboard reads as `None` and a failing
    /// clipboard command is an error, so it is only run once.
    fn is_available(&self, _matches: &ArgMatches) -> bool {
        true
    }

    fn read(&self, _matches: &ArgMatches) -> Result<Option<String>, InputError> {
        Ok(self
            .reader
            .read()?
            .and_then(|text| normalize(text, self.trim)))
    }
}
