// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Marker recognition for runner log lines
//!
//! The runner announces tests with three kinds of marker lines:
//!
//! ```text
//! === RUN TestName
//! --- PASS: TestName (0.01s)
//! --- FAIL: TestName (1.23s)
//! ```
//!
//! Everything else is free-text output.

use crate::result::TestOutcome;
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

/// Prefix of a start marker
pub const START_PREFIX: &str = "=== RUN ";
/// Prefix of a passing end marker
pub const PASS_PREFIX: &str = "--- PASS: ";
/// Prefix of a failing end marker
pub const FAIL_PREFIX: &str = "--- FAIL: ";

static END_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^ ]+) \((\d+\.\d+)").expect("end marker pattern is valid")
});

/// Classification of a single log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    /// `=== RUN <name>`, carrying the name
    Start(&'a str),
    /// `--- PASS: ` or `--- FAIL: `, carrying the unparsed remainder
    End {
        /// Which end marker this is
        outcome: TestOutcome,
        /// Text after the prefix
        rest: &'a str,
    },
    /// Any other line
    Output,
}

impl<'a> Marker<'a> {
    /// Classify a line by its prefix
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        if let Some(name) = line.strip_prefix(START_PREFIX) {
            Self::Start(name)
        } else if let Some(rest) = line.strip_prefix(FAIL_PREFIX) {
            Self::End {
                outcome: TestOutcome::Failed,
                rest,
            }
        } else if let Some(rest) = line.strip_prefix(PASS_PREFIX) {
            Self::End {
                outcome: TestOutcome::Passed,
                rest,
            }
        } else {
            Self::Output
        }
    }
}

/// Extract `(name, elapsed)` from an end marker with its prefix stripped
///
/// Returns `None` if the text does not contain `<name> (<secs>.<frac>`.
/// The first match wins, so `a b (1.0s)` yields the name `b`. Elapsed times
/// too large for a `Duration` saturate to `Duration::MAX`.
#[must_use]
pub fn parse_end(rest: &str) -> Option<(&str, Duration)> {
    let caps = END_MARKER.captures(rest)?;
    let name = caps.get(1)?.as_str();
    let seconds: f64 = caps.get(2)?.as_str().parse().ok()?;
    let elapsed = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX);
    Some((name, elapsed))
}
