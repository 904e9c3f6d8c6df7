//! Configuration for the xunit command line tool
//!
//! This module provides the argument parser and the few derived settings
//! (input source, log level) the binary needs.

use std::path::PathBuf;

use clap::Parser;

/// Parse `go test -v` style runner output into test records
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "xunit")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Runner log to parse
    ///
    /// Reads standard input when omitted.
    pub file: Option<PathBuf>,

    /// Print a pass/fail summary line after the test names
    #[arg(short, long, default_value = "false")]
    pub summary: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Check that the input, if any, can plausibly be read
    ///
    /// # Errors
    ///
    /// Returns an error if the input path names a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref file) = self.file
            && file.is_dir()
        {
            return Err(ConfigError::InputIsDirectory(file.clone()));
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input path points at a directory
    #[error("can't open {}: is a directory", .0.display())]
    InputIsDirectory(PathBuf),
}
