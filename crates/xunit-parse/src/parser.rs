// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Runner log parsing
//!
//! This module turns a stream of log lines into an ordered list of [`Test`]
//! records. A test is opened by `=== RUN`, collects every following
//! non-marker line, and is closed by the next `=== RUN` or by end of input.
//! `--- PASS:` / `--- FAIL:` markers update the open test without closing it,
//! so output printed after an end marker still belongs to that test.
//!
//! # Example
//!
//! ```
//! use xunit_parse::parser::parse_str;
//!
//! let log = "=== RUN TestA\nhello\n--- PASS: TestA (0.01s)\n";
//! let tests = parse_str(log).unwrap();
//! assert_eq!(tests.len(), 1);
//! assert_eq!(tests[0].message, "hello\n");
//! ```

use crate::error::ParseError;
use crate::marker::{self, Marker};
use crate::result::{Test, TestOutcome};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

// ============================================================================
// Line Source
// ============================================================================

/// Lazy, non-restartable sequence of lines read from a [`BufRead`]
///
/// Yields `None` at end of input and `Some(Err(_))` on a read failure. Lines
/// are split on `\n` with a trailing `\r` removed, invalid UTF-8 is replaced
/// rather than rejected, and there is no limit on line length.
pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineSource<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

// ============================================================================
// Output Parser
// ============================================================================

/// Incremental parser state
///
/// Feed lines with [`process_line`](Self::process_line) and collect the
/// records with [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct OutputParser {
    current: Option<Test>,
    results: Vec<Test>,
    line_number: usize,
}

impl OutputParser {
    /// Create a parser with no open test
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single line of runner output
    ///
    /// # Errors
    ///
    /// Returns `ParseError::NoOpenTest` for an end marker outside a test,
    /// `ParseError::MalformedMarker` if the end marker can't be parsed, and
    /// `ParseError::NameMismatch` if it names a different test.
    pub fn process_line(&mut self, line: &str) -> Result<(), ParseError> {
        self.line_number += 1;

        match Marker::classify(line) {
            Marker::Start(name) => {
                self.close_current();
                debug!(test = name, line = self.line_number, "test started");
                self.current = Some(Test::new(name));
            }
            Marker::End { outcome, rest } => {
                let line_number = self.line_number;
                let Some(test) = self.current.as_mut() else {
                    return Err(ParseError::NoOpenTest {
                        line_number,
                        outcome,
                    });
                };
                let (name, elapsed) =
                    marker::parse_end(rest).ok_or_else(|| ParseError::MalformedMarker {
                        line_number,
                        line: line.to_string(),
                    })?;
                if name != test.name {
                    return Err(ParseError::NameMismatch {
                        line_number,
                        found: name.to_string(),
                        expected: test.name.clone(),
                    });
                }
                test.failed = outcome == TestOutcome::Failed;
                test.duration = elapsed;
                debug!(test = name, %outcome, ?elapsed, "test finished");
            }
            Marker::Output => match self.current.as_mut() {
                Some(test) => {
                    test.message.push_str(line);
                    test.message.push('\n');
                }
                None => {
                    trace!(line = self.line_number, "discarding output outside a test");
                }
            },
        }

        Ok(())
    }

    /// The test currently receiving output, if any
    #[must_use]
    pub fn current(&self) -> Option<&Test> {
        self.current.as_ref()
    }

    /// Tests closed so far, in input order
    #[must_use]
    pub fn results(&self) -> &[Test] {
        &self.results
    }

    /// Close any open test and return all records
    #[must_use]
    pub fn finish(mut self) -> Vec<Test> {
        self.close_current();
        self.results
    }

    fn close_current(&mut self) {
        if let Some(test) = self.current.take() {
            self.results.push(test);
        }
    }
}

// ============================================================================
// Parsing Functions
// ============================================================================

/// Parse a sequence of lines
///
/// # Errors
///
/// Returns the first marker validation error, or `ParseError::LineReadFailure`
/// if the source yields an IO error. No partial results are returned.
pub fn parse_lines<I>(lines: I) -> Result<Vec<Test>, ParseError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut parser = OutputParser::new();
    for line in lines {
        parser.process_line(&line?)?;
    }
    let tests = parser.finish();
    debug!(count = tests.len(), "parsed runner output");
    Ok(tests)
}

/// Parse runner output from a buffered reader
///
/// # Errors
///
/// See [`parse_lines`].
pub fn parse_output<R: BufRead>(reader: R) -> Result<Vec<Test>, ParseError> {
    parse_lines(LineSource::new(reader))
}

/// Parse runner output held in memory
///
/// # Errors
///
/// See [`parse_lines`].
pub fn parse_str(output: &str) -> Result<Vec<Test>, ParseError> {
    parse_output(output.as_bytes())
}

/// Open a log file and parse it
///
/// # Errors
///
/// Returns `ParseError::SourceOpenFailure` if the file can't be opened,
/// otherwise see [`parse_lines`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Test>, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::SourceOpenFailure {
        path: path.to_path_buf(),
        source,
    })?;
    parse_output(BufReader::new(file))
}
