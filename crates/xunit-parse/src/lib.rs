// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! xunit-parse: structured results from test runner logs
//!
//! This library crate parses the line-oriented log written by `go test -v`
//! style runners (`=== RUN`, `--- PASS:`, `--- FAIL:`) into an ordered list
//! of [`Test`] records for reporting and CI aggregation.
//!
//! # Example
//!
//! ```no_run
//! use xunit_parse::{OutputParser, parse_file};
//!
//! // Parse a complete log file
//! let tests = parse_file("test.log").unwrap();
//!
//! // Or feed lines incrementally
//! let mut parser = OutputParser::new();
//! parser.process_line("=== RUN TestA").unwrap();
//! let tests = parser.finish();
//! ```

pub mod error;
pub mod marker;
pub mod parser;
pub mod result;

pub use error::ParseError;
pub use parser::{LineSource, OutputParser, parse_file, parse_lines, parse_output, parse_str};
pub use result::{RunSummary, Test, TestOutcome, failing_tests};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ParseError;
    pub use crate::parser::{OutputParser, parse_output, parse_str};
    pub use crate::result::{RunSummary, Test, TestOutcome};
}
