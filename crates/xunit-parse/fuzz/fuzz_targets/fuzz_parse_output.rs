// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for runner log parsing
//!
//! Raw bytes go straight to `parse_output`, so invalid UTF-8 and stray
//! carriage returns are exercised too.

#![no_main]

use libfuzzer_sys::fuzz_target;

use xunit_parse::parse_output;

fuzz_target!(|data: &[u8]| {
    // parse_output should never panic on any input
    let _ = parse_output(data);
});
