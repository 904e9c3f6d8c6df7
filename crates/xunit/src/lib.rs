//! xunit library
//!
//! This module exports the command line plumbing of xunit for use in
//! integration tests.

pub mod config;
pub mod report;

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};
use xunit_parse::{RunSummary, parse_file, parse_output};

use crate::config::Config;

/// Parse the configured input and write the report to `out`
///
/// `stdin` is only read when no input file is configured.
///
/// # Errors
///
/// Returns an error if the input can't be opened or parsed, or if writing
/// the report fails. Nothing is written to `out` unless parsing succeeds.
pub fn run<R: BufRead, W: Write>(config: &Config, stdin: R, out: &mut W) -> Result<RunSummary> {
    config.validate()?;

    let tests = match config.file {
        Some(ref path) => {
            debug!(path = %path.display(), "reading runner log");
            parse_file(path)?
        }
        None => {
            debug!("reading runner log from stdin");
            parse_output(stdin)?
        }
    };

    let summary = RunSummary::from_tests(&tests);
    info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        "parsed runner log"
    );

    report::write_report(out, &tests, config.summary)?;
    out.flush()?;
    Ok(summary)
}
