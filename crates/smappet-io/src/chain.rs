//! Ordered fallback over several input sources.

use std::fmt;

use clap::ArgMatches;
use tracing::{debug, warn};

use crate::source::{InputSource, Resolved, SourceKind};
use crate::InputError;

type Check<T> = Box<dyn Fn(&T) -> Result<(), String> + Send + Sync>;

/// Sources tried in order until one yields a value.
///
/// ```ignore
/// // --vars, otherwise ask
/// let names = InputChain::new()
///     .source(ArgSource::new("vars"))
///     .source(PromptSource::new("Variable names"))
///     .resolve_optional(&matches)?;
/// ```
pub struct InputChain<T> {
    sources: Vec<Box<dyn InputSource<T>>>,
    checks: Vec<Check<T>>,
}

impl<T: Clone + Send + Sync + 'static> InputChain<T> {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Append a source. Earlier sources take precedence.
    pub fn source(mut self, source: impl InputSource<T> + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Reject values for which `accept` returns `false`.
    ///
    /// Interactive sources ask again; any other source fails with
    /// [`InputError::Invalid`] carrying `message`.
    pub fn require<F>(mut self, accept: F, message: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.checks.push(Box::new(move |value| {
            accept(value).then_some(()).ok_or_else(|| message.clone())
        }));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn resolve(&self, matches: &ArgMatches) -> Result<T, InputError> {
        self.resolve_traced(matches).map(|resolved| resolved.value)
    }

    /// Like [`resolve`](Self::resolve), but "nothing given" is `Ok(None)`.
    ///
    /// An exhausted chain and a closed prompt both count as nothing given.
    pub fn resolve_optional(&self, matches: &ArgMatches) -> Result<Option<T>, InputError> {
        match self.resolve(matches) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_absent() => {
                debug!(reason = %err, "no input");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Resolve and report which source produced the value.
    pub fn resolve_traced(&self, matches: &ArgMatches) -> Result<Resolved<T>, InputError> {
        for source in self.sources.iter().filter(|s| s.is_available(matches)) {
            if let Some(value) = self.read_checked(&**source, matches)? {
                debug!(source = %source.kind(), "resolved input");
                return Ok(Resolved {
                    value,
                    from: source.kind(),
                });
            }
        }

        Err(InputError::Missing)
    }

    fn read_checked(
        &self,
        source: &dyn InputSource<T>,
        matches: &ArgMatches,
    ) -> Result<Option<T>, InputError> {
        loop {
            let Some(value) = source.read(matches)? else {
                return Ok(None);
            };
            match self.checks.iter().find_map(|check| check(&value).err()) {
                None => return Ok(Some(value)),
                Some(message) if source.is_interactive() => warn!("{message}, try again"),
                Some(message) => return Err(InputError::Invalid(message)),
            }
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Default for InputChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for InputChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<SourceKind> = self.sources.iter().map(|s| s.kind()).collect();
        f.debug_struct("InputChain")
            .field("sources", &kinds)
            .field("checks", &self.checks.len())
            .finish()
    }
}
