//! Input and clipboard plumbing for the smappet command line.
//!
//! The copy and paste commands need some text (from a file, piped stdin or
//! the clipboard), answers to comma-separated list prompts, and somewhere to
//! put the result. Each of those is an [`InputSource`]; sources are stacked
//! into an [`InputChain`] and the first one that yields a value wins:
//!
//! ```text
//! paste template:  FileSource → StdinSource → ClipboardSource
//! paste values:    ArgSource("values") → PromptSource
//! ```
//!
//! Stdin, the clipboard and the terminal sit behind traits with mock
//! implementations, so the flows are testable without a TTY or a display:
//!
//! ```
//! use clap::Command;
//! use smappet_io::{ClipboardSource, InputChain, MockClipboard, MockStdin, StdinSource};
//!
//! let matches = Command::new("paste").get_matches_from(["paste"]);
//! let template = InputChain::new()
//!     .source(StdinSource::with_reader(MockStdin::terminal()))
//!     .source(ClipboardSource::with_reader(MockClipboard::with_content("{{#snakeCase}}a{{/snakeCase}}")))
//!     .resolve(&matches)
//!     .unwrap();
//! assert_eq!(template, "{{#snakeCase}}a{{/snakeCase}}");
//! ```

mod chain;
pub mod env;
mod error;
pub mod shell;
mod source;
pub mod sources;

pub use chain::InputChain;
pub use env::{
    ClipboardReader, ClipboardWriter, MockClipboard, MockStdin, RealStdin, StdinReader,
    SystemClipboard,
};
pub use error::{InputError, OutputError, ShellError};
pub use source::{InputSource, Resolved, SourceKind};
pub use sources::{
    ArgSource, ClipboardSource, FileSource, MockTerminal, PromptSource, RealTerminal,
    StdinSource, Terminal,
};
