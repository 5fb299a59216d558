//! Asking for a line of text on the terminal.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::{Arc, Mutex, PoisonError};

use clap::ArgMatches;

use super::normalize;
use crate::source::{InputSource, SourceKind};
use crate::InputError;

/// The terminal a prompt talks to.
pub trait Terminal: Send + Sync {
    /// Whether a user is there to answer.
    fn is_interactive(&self) -> bool;

    /// Show `prompt` and read one line. `Ok(None)` means end of input.
    fn ask(&self, prompt: &str) -> io::Result<Option<String>>;
}

/// Prompts on stderr, answers from stdin. Stdout is left for rendered text.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl Terminal for RealTerminal {
    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn ask(&self, prompt: &str) -> io::Result<Option<String>> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(prompt.as_bytes())?;
        stderr.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        Ok(Some(answer.strip_suffix('\r').unwrap_or(answer).to_string()))
    }
}

/// A one-line question with an optional hint, e.g.
/// `Replacement values (New values for userName, itemId): `.
///
/// Closing the input (Ctrl+D) gives [`InputError::Cancelled`]; an empty
/// answer gives `None`.
#[derive(Clone)]
pub struct PromptSource<T: Terminal = RealTerminal> {
    terminal: Arc<T>,
    question: String,
    hint: Option<String>,
    trim: bool,
}

impl PromptSource<RealTerminal> {
    pub fn new(question: impl Into<String>) -> Self {
        Self::with_terminal(question, RealTerminal)
    }
}

impl<T: Terminal> PromptSource<T> {
    pub fn with_terminal(question: impl Into<String>, terminal: T) -> Self {
        Self {
            terminal: Arc::new(terminal),
            question: question.into(),
            hint: None,
            trim: true,
        }
    }

    /// Example or explanation shown in parentheses after the question.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Strip surrounding whitespace from the answer (the default).
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn prompt_text(&self) -> String {
        match &self.hint {
            Some(hint) => format!("{} ({hint}): ", self.question),
            None => format!("{}: ", self.question),
        }
    }
}

impl<T: Terminal + 'static> InputSource<String> for PromptSource<T> {
    fn kind(&self) -> SourceKind {
        SourceKind::Prompt
    }

    fn is_available(&self, _matches: &ArgMatches) -> bool {
        self.terminal.is_interactive()
    }

    fn read(&self, _matches: &ArgMatches) -> Result<Option<String>, InputError> {
        if !self.terminal.is_interactive() {
            return Ok(None);
        }
        match self.terminal.ask(&self.prompt_text()).map_err(InputError::Prompt)? {
            Some(answer) => Ok(normalize(answer, self.trim)),
            None => Err(InputError::Cancelled),
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Scripted terminal for tests.
///
/// Answers are handed out in order; once they run out the terminal behaves
/// as if the input was closed. Clones share the script and the log of
/// prompts shown.
#[derive(Debug, Clone)]
pub struct MockTerminal {
    interactive: bool,
    answers: Arc<Mutex<VecDeque<String>>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl MockTerminal {
    /// No terminal attached; prompts are unavailable.
    pub fn detached() -> Self {
        Self::scripted(false, Vec::<String>::new())
    }

    /// A terminal whose user types `answers`, one per prompt.
    pub fn answering(answers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::scripted(true, answers)
    }

    /// A terminal whose input is already closed.
    pub fn closed() -> Self {
        Self::scripted(true, Vec::<String>::new())
    }

    /// Prompts shown so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn scripted(interactive: bool, answers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            interactive,
            answers: Arc::new(Mutex::new(answers.into_iter().map(Into::into).collect())),
            asked: Arc::default(),
        }
    }
}

impl Terminal for MockTerminal {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn ask(&self, prompt: &str) -> io::Result<Option<String>> {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_string());
        Ok(self
            .answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front())
    }
}
