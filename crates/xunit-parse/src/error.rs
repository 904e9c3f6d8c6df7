// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for xunit-parse

use crate::result::TestOutcome;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a runner log
///
/// Every variant is fatal: the parse is aborted and no partial results are
/// returned.
#[derive(Debug, Error)]
pub enum ParseError {
    /// An end marker whose remainder does not look like `<name> (<secs>.<frac>`
    #[error("line {line_number}: can't parse {line}")]
    MalformedMarker {
        /// 1-based line number of the offending marker
        line_number: usize,
        /// The full marker line
        line: String,
    },

    /// A pass/fail marker appeared while no test was running
    #[error("line {line_number}: {outcome} not inside test")]
    NoOpenTest {
        /// 1-based line number of the offending marker
        line_number: usize,
        /// Which end marker was seen
        outcome: TestOutcome,
    },

    /// A pass/fail marker named a different test than the open one
    #[error("line {line_number}: wrong test end ({found}!={expected})")]
    NameMismatch {
        /// 1-based line number of the offending marker
        line_number: usize,
        /// Name carried by the end marker
        found: String,
        /// Name of the currently open test
        expected: String,
    },

    /// The line source failed for a reason other than end-of-stream
    #[error("can't read line: {0}")]
    LineReadFailure(#[from] std::io::Error),

    /// The input file could not be opened
    #[error("can't open {}: {source}", path.display())]
    SourceOpenFailure {
        /// Path that was passed in
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Line number the error was raised at, if it came from a marker
    #[must_use]
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::MalformedMarker { line_number, .. }
            | Self::NoOpenTest { line_number, .. }
            | Self::NameMismatch { line_number, .. } => Some(*line_number),
            Self::LineReadFailure(_) | Self::SourceOpenFailure { .. } => None,
        }
    }
}
