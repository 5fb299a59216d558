//! Command line definition.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Copy code as a casing-aware template, paste it back with new names.
#[derive(Debug, Parser)]
#[command(name = "smappet", version, about)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// YAML configuration file. Falls back to $SMAPPET_CONFIG.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Turn text into a template and put it on the clipboard
    Copy(CopyArgs),
    /// Render a template with new values and print it
    Paste(PasteArgs),
    /// List the variables a template uses
    Vars(VarsArgs),
    /// List the registered casings
    Casings(CasingsArgs),
}

#[derive(Debug, Args)]
pub struct CopyArgs {
    /// Comma separated camelCase variable names (prompted when omitted)
    #[arg(long, value_name = "LIST")]
    pub vars: Option<String>,

    /// Read the text from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print the template instead of copying it
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Debug, Args)]
pub struct PasteArgs {
    /// Comma separated replacement values (prompted when omitted)
    #[arg(long, value_name = "LIST")]
    pub values: Option<String>,

    /// Read the template from a file instead of stdin or the clipboard
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct VarsArgs {
    /// Read the template from a file instead of stdin or the clipboard
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Fail on unbalanced or mismatched markers
    #[arg(long)]
    pub strict: bool,

    /// Print the names as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CasingsArgs {
    /// Text rendered in every casing
    #[arg(long, value_name = "TEXT", default_value = "first name")]
    pub sample: String,
}
