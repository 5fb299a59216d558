//! Log output setup.

use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directives for a `-v` count.
pub fn filter_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,smappet=info,smappet_core=info,smappet_io=info",
        2 => "info,smappet=debug,smappet_core=debug,smappet_io=debug",
        _ => "debug,smappet=trace,smappet_core=trace,smappet_io=trace",
    }
}

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// rendered text. `RUST_LOG` overrides the verbosity flags.
pub fn init_tracing(verbose: u8) {
    let directives = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| filter_directives(verbose).to_string());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
