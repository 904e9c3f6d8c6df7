// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for end marker extraction

#![no_main]

use libfuzzer_sys::fuzz_target;

use xunit_parse::marker::parse_end;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Some((name, _)) = parse_end(input) {
            assert!(!name.contains(' '));
        }
    }
});
