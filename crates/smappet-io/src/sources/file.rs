//! File input source.

use std::path::PathBuf;

use clap::ArgMatches;
use tracing::debug;

use crate::source::{InputSource, SourceKind};
use crate::InputError;

/// Collect input from the file named by a CLI argument.
///
/// Available when the argument was provided. The file content is returned
/// as-is; an empty file yields `None`.
#[derive(Debug, Clone)]
pub struct FileSource {
    arg: String,
}

impl FileSource {
    /// The `arg` should match a clap argument holding a path.
    pub fn new(arg: impl Into<String>) -> Self {
        Self { arg: arg.into() }
    }

    fn path(&self, matches: &ArgMatches) -> Option<PathBuf> {
        matches
            .try_get_one::<PathBuf>(&self.arg)
            .ok()
            .flatten()
            .cloned()
            .or_else(|| {
                matches
                    .try_get_one::<String>(&self.arg)
                    .ok()
                    .flatten()
                    .map(PathBuf::from)
            })
    }
}

impl InputSource<String> for FileSource {
    fn kind(&self) -> SourceKind {
        SourceKind::File
    }

    fn is_available(&self, matches: &ArgMatches) -> bool {
        self.path(matches).is_some()
    }

    fn read(&self, matches: &ArgMatches) -> Result<Option<String>, InputError> {
        let Some(path) = self.path(matches) else {
            return Ok(None);
        };

        let content = std::fs::read_to_string(&path).map_err(|source| InputError::File {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "read input file");

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(content))
        }
    }
}
