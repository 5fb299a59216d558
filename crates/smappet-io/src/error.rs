//! Error types for reading input and writing the clipboard.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::string::FromUtf8Error;
use std::time::Duration;

/// Failure while gathering input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("could not read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("could not read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read the clipboard: {0}")]
    Clipboard(String),

    /// The prompt was closed (end of input) without an answer.
    #[error("prompt closed without an answer")]
    Cancelled,

    #[error("prompt failed: {0}")]
    Prompt(#[source] io::Error),

    /// A non-interactive source produced a value that failed a check.
    #[error("invalid input: {0}")]
    Invalid(String),

    /// Every source came up empty and there is no default.
    #[error("no input given")]
    Missing,
}

impl InputError {
    /// `true` when the user simply gave nothing, as opposed to a failure.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Missing | Self::Cancelled)
    }
}

/// Failure running an external clipboard command.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("`{command}` did not finish within {after:?}")]
    TimedOut { command: String, after: Duration },

    #[error("`{command}` exited with {status}")]
    Status { command: String, status: ExitStatus },

    #[error("command output is not UTF-8")]
    NotUtf8(#[from] FromUtf8Error),
}

/// Failure writing the clipboard.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("no clipboard command for this platform; set clipboard.copy in the config")]
    Unsupported,

    #[error("could not write the clipboard: {0}")]
    Command(#[from] ShellError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absence_is_not_failure() {
        assert!(InputError::Missing.is_absent());
        assert!(InputError::Cancelled.is_absent());
        assert!(!InputError::Clipboard("boom".into()).is_absent());
        assert!(!InputError::Invalid("bad".into()).is_absent());
    }

    #[test]
    fn file_error_names_path() {
        let err = InputError::File {
            path: PathBuf::from("snippet.ts"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "could not read snippet.ts: gone");
    }
}
