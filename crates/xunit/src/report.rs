// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Plain-text report of parsed test records

use std::io::{self, Write};

use xunit_parse::{RunSummary, Test};

/// Write the parsed records to `out`
///
/// The first line is the debug form of the whole record list, followed by
/// one test name per line in parse order. With `summary` set a final
/// `N tests, P passed, F failed (<duration>)` line is appended.
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write_report<W: Write>(out: &mut W, tests: &[Test], summary: bool) -> io::Result<()> {
    writeln!(out, "{tests:?}")?;
    for test in tests {
        writeln!(out, "{}", test.name)?;
    }
    if summary {
        writeln!(out, "{}", RunSummary::from_tests(tests))?;
    }
    Ok(())
}
