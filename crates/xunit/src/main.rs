//! xunit: parse `go test -v` style runner logs
//!
//! Reads a runner log from the file named on the command line (or stdin),
//! prints the parsed test records, and exits non-zero if the log can't be
//! opened or parsed.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use xunit::config::Config;

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    match xunit::run(&config, stdin, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "parse aborted");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
