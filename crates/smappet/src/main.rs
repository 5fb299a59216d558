use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches};
use smappet::cli::Cli;

fn main() -> ExitCode {
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };
    smappet::logging::init_tracing(cli.verbose);

    match smappet::run(&cli, &matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
