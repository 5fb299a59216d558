//! Stdin and clipboard access behind traits, with in-memory mocks.

use std::io::{self, IsTerminal, Read};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::debug;

use crate::error::{InputError, OutputError};
use crate::shell::{run_consuming, run_piped};

pub trait StdinReader: Send + Sync {
    /// `false` when input is piped in.
    fn is_terminal(&self) -> bool;

    /// Read stdin to the end. Only meaningful when it is piped.
    fn read_all(&self) -> io::Result<String>;
}

pub trait ClipboardReader: Send + Sync {
    /// Current clipboard text, `None` when empty.
    fn read(&self) -> Result<Option<String>, InputError>;
}

pub trait ClipboardWriter: Send + Sync {
    fn write(&self, text: &str) -> Result<(), OutputError>;
}

/// The process's stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_all(&self) -> io::Result<String> {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text)?;
        Ok(text)
    }
}

/// The system clipboard, reached through shell commands.
///
/// | platform | paste                            | copy                          |
/// |----------|----------------------------------|-------------------------------|
/// | macOS    | `pbpaste`                        | `pbcopy`                      |
/// | Linux    | `xclip -selection clipboard -o`  | `xclip -selection clipboard`  |
/// | other    | none                             | none                          |
///
/// Either command can be replaced, for example with `wl-paste -n` / `wl-copy`.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    paste_command: Option<String>,
    copy_command: Option<String>,
    timeout: Duration,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new() -> Self {
        let (paste, copy) = platform_commands();
        Self {
            paste_command: paste.map(String::from),
            copy_command: copy.map(String::from),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Command printing the clipboard on stdout.
    pub fn paste_command(mut self, command: impl Into<String>) -> Self {
        self.paste_command = Some(command.into());
        self
    }

    /// Command taking the new clipboard text on stdin.
    pub fn copy_command(mut self, command: impl Into<String>) -> Self {
        self.copy_command = Some(command.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn platform_commands() -> (Option<&'static str>, Option<&'static str>) {
    if cfg!(target_os = "macos") {
        (Some("pbpaste"), Some("pbcopy"))
    } else if cfg!(target_os = "linux") {
        (
            Some("xclip -selection clipboard -o"),
            Some("xclip -selection clipboard"),
        )
    } else {
        (None, None)
    }
}

impl ClipboardReader for SystemClipboard {
    fn read(&self) -> Result<Option<String>, InputError> {
        let Some(command) = self.paste_command.as_deref() else {
            return Err(InputError::Clipboard(
                "no paste command for this platform".to_string(),
            ));
        };
        let text = run_piped(command, "", Some(self.timeout))
            .map_err(|e| InputError::Clipboard(e.to_string()))?;
        Ok(Some(text).filter(|t| !t.is_empty()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&self, text: &str) -> Result<(), OutputError> {
        let command = self.copy_command.as_deref().ok_or(OutputError::Unsupported)?;
        run_consuming(command, text, Some(self.timeout))?;
        debug!(bytes = text.len(), "wrote clipboard");
        Ok(())
    }
}

/// Scripted stdin: either an interactive terminal or fixed piped text.
#[derive(Debug, Clone)]
pub struct MockStdin {
    piped: Option<String>,
}

impl MockStdin {
    /// Stdin attached to a terminal.
    pub fn terminal() -> Self {
        Self { piped: None }
    }

    /// Stdin with `text` piped in.
    pub fn piped(text: impl Into<String>) -> Self {
        Self {
            piped: Some(text.into()),
        }
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.piped.is_none()
    }

    fn read_all(&self) -> io::Result<String> {
        Ok(self.piped.clone().unwrap_or_default())
    }
}

#[derive(Debug, Default)]
struct ClipboardState {
    text: Option<String>,
    writes: usize,
}

/// In-memory clipboard. Clones share state, so a test can keep one handle
/// and give another to the code under test.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    state: Arc<Mutex<ClipboardState>>,
}

impl MockClipboard {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_content(text: impl Into<String>) -> Self {
        let clipboard = Self::default();
        clipboard.lock().text = Some(text.into());
        clipboard
    }

    pub fn contents(&self) -> Option<String> {
        self.lock().text.clone()
    }

    /// How many times the clipboard was written.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ClipboardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ClipboardReader for MockClipboard {
    fn read(&self) -> Result<Option<String>, InputError> {
        Ok(self.contents())
    }
}

impl ClipboardWriter for MockClipboard {
    fn write(&self, text: &str) -> Result<(), OutputError> {
        let mut state = self.lock();
        state.text = Some(text.to_string());
        state.writes += 1;
        Ok(())
    }
}
