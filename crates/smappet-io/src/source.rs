//! The [`InputSource`] trait.

use std::fmt;

use clap::ArgMatches;

use crate::InputError;

/// One place a value of type `T` may come from.
///
/// An [`InputChain`](crate::InputChain) asks each source in turn. A source
/// that cannot apply here (argument not given, stdin is a TTY) reports
/// `false` from [`is_available`](Self::is_available); one that applies but
/// comes up empty returns `Ok(None)` from [`read`](Self::read).
pub trait InputSource<T>: Send + Sync {
    fn kind(&self) -> SourceKind;

    fn is_available(&self, matches: &ArgMatches) -> bool;

    fn read(&self, matches: &ArgMatches) -> Result<Option<T>, InputError>;

    /// Interactive sources are asked again when a value fails validation.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Arg,
    File,
    Stdin,
    Clipboard,
    Prompt,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arg => "argument",
            Self::File => "file",
            Self::Stdin => "stdin",
            Self::Clipboard => "clipboard",
            Self::Prompt => "prompt",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value together with the source that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub from: SourceKind,
}
