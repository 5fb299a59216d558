//! The `smappet` command line.
//!
//! `copy` turns a piece of code into a template by wrapping every casing
//! variant of the given variable names in markers; `paste` renders such a
//! template with new values:
//!
//! ```text
//! $ echo 'const USER_NAME = userName;' | smappet copy --vars userName --stdout
//! const {{#constantCase}}userName{{/constantCase}} = {{#camelCase}}userName{{/camelCase}};
//! $ smappet paste --values 'order id'
//! const ORDER_ID = orderId;
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

use std::io::Write;

use anyhow::Context;
use clap::ArgMatches;
use smappet_core::Engine;
use smappet_io::{ClipboardReader, ClipboardWriter, StdinReader, Terminal};

use crate::cli::{Cli, Commands};
use crate::commands::Host;
use crate::config::Config;

/// Run the parsed command against the real terminal, stdin and clipboard.
///
/// `matches` are the raw matches `cli` was built from; input sources read
/// their arguments from the subcommand's matches.
pub fn run(cli: &Cli, matches: &ArgMatches) -> anyhow::Result<()> {
    let config = Config::discover(cli.config.as_deref())?;
    let engine = Engine::from_config(&config.engine);
    let host = Host::system(config.system_clipboard());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(cli, matches, &engine, &host, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Route `cli.command` to its handler.
pub fn dispatch<S, C, T>(
    cli: &Cli,
    matches: &ArgMatches,
    engine: &Engine,
    host: &Host<S, C, T>,
    out: &mut dyn Write,
) -> anyhow::Result<()>
where
    S: StdinReader + Clone + 'static,
    C: ClipboardReader + ClipboardWriter + Clone + 'static,
    T: Terminal + Clone + 'static,
{
    let (_, sub) = matches.subcommand().context("no command given")?;
    match &cli.command {
        Commands::Copy(args) => commands::copy(engine, host, args, sub, out),
        Commands::Paste(_) => commands::paste(engine, host, sub, out),
        Commands::Vars(args) => commands::vars(engine, host, args, sub, out),
        Commands::Casings(args) => commands::casings(args, out),
    }
}
