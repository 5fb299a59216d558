//! Command handlers.
//!
//! Handlers take their I/O through a [`Host`] so tests can swap in mock
//! stdin, clipboard and terminal implementations. Rendered text goes to the
//! `out` writer, which is stdout in the real binary.

use std::io::Write;

use anyhow::Context;
use clap::ArgMatches;
use smappet_core::{parse_names, scan_strict, Casing, Engine};
use smappet_io::{
    ArgSource, ClipboardReader, ClipboardSource, ClipboardWriter, FileSource, InputChain,
    PromptSource, RealStdin, RealTerminal, StdinReader, StdinSource, SystemClipboard, Terminal,
};
use tracing::info;

use crate::cli::{CasingsArgs, CopyArgs, VarsArgs};

const VARS_PROMPT: &str = "Comma separated list of camelCase variable names to pick up";
const VARS_PLACEHOLDER: &str = "variableNames, toPickUp";
const NO_NAMES: &str = "no variable names given";
const VALUES_PROMPT: &str = "Comma separated list of replacement values";

/// The environment a command reads from and writes to.
#[derive(Debug, Clone)]
pub struct Host<S, C, T> {
    pub stdin: S,
    pub clipboard: C,
    pub terminal: T,
}

impl Host<RealStdin, SystemClipboard, RealTerminal> {
    pub fn system(clipboard: SystemClipboard) -> Self {
        Self {
            stdin: RealStdin,
            clipboard,
            terminal: RealTerminal,
        }
    }
}

impl<S, C, T> Host<S, C, T>
where
    S: StdinReader + Clone + 'static,
    C: ClipboardReader + ClipboardWriter + Clone + 'static,
    T: Terminal + Clone + 'static,
{
    /// `--file`, then piped stdin.
    fn selection(&self) -> InputChain<String> {
        InputChain::new()
            .source(FileSource::new("file"))
            .source(StdinSource::with_reader(self.stdin.clone()).trim(false))
    }

    /// `--file`, then piped stdin, then the clipboard.
    fn template(&self) -> InputChain<String> {
        self.selection()
            .source(ClipboardSource::with_reader(self.clipboard.clone()))
    }

    fn list(&self, arg: &str, prompt: PromptSource<T>) -> InputChain<String> {
        InputChain::new()
            .source(ArgSource::new(arg))
            .source(prompt)
    }
}

/// Capture: tag the selection and copy the template.
pub fn copy<S, C, T>(
    engine: &Engine,
    host: &Host<S, C, T>,
    args: &CopyArgs,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> anyhow::Result<()>
where
    S: StdinReader + Clone + 'static,
    C: ClipboardReader + ClipboardWriter + Clone + 'static,
    T: Terminal + Clone + 'static,
{
    let prompt = PromptSource::with_terminal(VARS_PROMPT, host.terminal.clone())
        .hint(VARS_PLACEHOLDER);
    let variables = host
        .list("vars", prompt)
        .require(|list: &String| !parse_names(list).is_empty(), NO_NAMES)
        .resolve_optional(matches)
        .context("reading variable names")?;
    let selection = host
        .selection()
        .resolve_optional(matches)
        .context("reading text")?;

    let Some(template) = engine.capture(selection.as_deref(), variables.as_deref())? else {
        info!(
            has_text = selection.is_some(),
            has_variables = variables.is_some(),
            "nothing to copy"
        );
        return Ok(());
    };

    if args.stdout {
        out.write_all(template.as_bytes())?;
    } else {
        host.clipboard
            .write(&template)
            .context("writing clipboard")?;
        info!(bytes = template.len(), "copied template");
    }
    Ok(())
}

/// Apply: render the template with new values and print it.
pub fn paste<S, C, T>(
    engine: &Engine,
    host: &Host<S, C, T>,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> anyhow::Result<()>
where
    S: StdinReader + Clone + 'static,
    C: ClipboardReader + ClipboardWriter + Clone + 'static,
    T: Terminal + Clone + 'static,
{
    let Some(template) = host
        .template()
        .resolve_optional(matches)
        .context("reading template")?
    else {
        info!("nothing to paste");
        return Ok(());
    };

    let names = engine.variables(&template);
    let values = if names.is_empty() {
        None
    } else {
        let prompt = PromptSource::with_terminal(VALUES_PROMPT, host.terminal.clone())
            .hint(format!("New values for {}", names.join(", ")))
            .trim(false);
        host.list("values", prompt)
            .resolve_optional(matches)
            .context("reading replacement values")?
    };

    if let Some(rendered) = engine.apply(Some(template.as_str()), values.as_deref())? {
        out.write_all(rendered.as_bytes())?;
    }
    Ok(())
}

/// List the variables of a template, one per line or as JSON.
pub fn vars<S, C, T>(
    engine: &Engine,
    host: &Host<S, C, T>,
    args: &VarsArgs,
    matches: &ArgMatches,
    out: &mut dyn Write,
) -> anyhow::Result<()>
where
    S: StdinReader + Clone + 'static,
    C: ClipboardReader + ClipboardWriter + Clone + 'static,
    T: Terminal + Clone + 'static,
{
    let Some(template) = host
        .template()
        .resolve_optional(matches)
        .context("reading template")?
    else {
        return Ok(());
    };

    let names = if args.strict {
        scan_strict(&template)?
    } else {
        engine.variables(&template)
    };

    if args.json {
        writeln!(out, "{}", serde_json::to_string(&names)?)?;
    } else {
        for name in &names {
            writeln!(out, "{name}")?;
        }
    }
    Ok(())
}

/// Print every registered casing with `args.sample` rendered in it.
pub fn casings(args: &CasingsArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let width = Casing::ALL
        .iter()
        .map(|c| c.name().len())
        .max()
        .unwrap_or(0);
    for casing in Casing::ALL {
        writeln!(
            out,
            "{:<width$}  {}",
            casing.name(),
            casing.apply(&args.sample)
        )?;
    }
    Ok(())
}
