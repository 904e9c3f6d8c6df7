// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for xunit-parse
//!
//! These tests parse captured runner logs from `tests/fixtures`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use similar_asserts::assert_eq;
use xunit_parse::{
    ParseError, RunSummary, Test, TestOutcome, failing_tests, parse_file, parse_str,
};

/// Get the fixtures directory for test data
fn fixtures_dir() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    Path::new(&manifest_dir).join("tests/fixtures")
}

fn names(tests: &[Test]) -> Vec<&str> {
    tests.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn test_parse_verbose_go_test_log() {
    let tests = parse_file(fixtures_dir().join("go-test-verbose.log"))
        .expect("Failed to parse go-test-verbose.log");

    assert_eq!(
        names(&tests),
        vec![
            "TestParseConfig",
            "TestDialTimeout",
            "TestEncodeRoundTrip",
            "TestSlowSort"
        ]
    );

    assert_eq!(
        tests[0].message,
        "    config_test.go:14: loading testdata/basic.toml\n"
    );
    assert_eq!(tests[1].outcome(), TestOutcome::Failed);
    assert_eq!(
        tests[1].message_lines().collect::<Vec<_>>(),
        vec![
            "    dial_test.go:41: dialing 127.0.0.1:9",
            "    dial_test.go:52: expected timeout, got connection refused",
        ]
    );
    assert_eq!(tests[1].duration_display(), "2.51s");
    assert_eq!(tests[2].duration_display(), "250ms");

    // The package trailer lands on the last open test
    assert_eq!(
        tests[3].message,
        "FAIL\nexit status 1\nFAIL\texample.com/pkg\t13.384s\n"
    );

    let failing = failing_tests(&tests);
    assert_eq!(failing.len(), 1);
    assert_eq!(failing[0].name, "TestDialTimeout");

    let summary = RunSummary::from_tests(&tests);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.passed, 3);
    assert_eq!(summary.failed, 1);
}

#[test]
fn test_parse_unfinished_log() {
    let tests = parse_file(fixtures_dir().join("unfinished.log"))
        .expect("Failed to parse unfinished.log");

    assert_eq!(tests.len(), 2);
    let hung = &tests[1];
    assert_eq!(hung.name, "TestHang");
    assert_eq!(hung.duration, Duration::ZERO);
    assert!(hung.passed());
    assert_eq!(
        hung.message,
        "waiting for lock\npanic: test timed out after 10m0s\n"
    );
}

#[test]
fn test_parse_mismatched_log() {
    let err = parse_file(fixtures_dir().join("mismatched.log")).unwrap_err();
    assert!(matches!(err, ParseError::NameMismatch { .. }));
    assert_eq!(err.line_number(), Some(3));
}

#[test]
fn test_parse_missing_file() {
    let path = fixtures_dir().join("does-not-exist.log");
    let err = parse_file(&path).unwrap_err();
    match err {
        ParseError::SourceOpenFailure { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_reparse_is_identical() {
    let log = std::fs::read_to_string(fixtures_dir().join("go-test-verbose.log"))
        .expect("Failed to read fixture");

    let first = parse_str(&log).expect("first parse");
    let second = parse_str(&log).expect("second parse");
    assert_eq!(first, second);
}

#[test]
fn test_crlf_log_matches_lf_log() {
    let log = std::fs::read_to_string(fixtures_dir().join("go-test-verbose.log"))
        .expect("Failed to read fixture");
    let crlf = log.replace('\n', "\r\n");

    assert_eq!(
        parse_str(&crlf).expect("crlf parse"),
        parse_str(&log).expect("lf parse")
    );
}

#[test]
fn test_records_serialize() {
    let tests = parse_str("=== RUN TestA\nboom\n--- FAIL: TestA (1.50s)\n").expect("Should parse");

    let json = serde_json::to_value(&tests).expect("Failed to serialize tests");
    assert_eq!(json[0]["name"], "TestA");
    assert_eq!(json[0]["failed"], true);
    assert_eq!(json[0]["message"], "boom\n");
    assert_eq!(json[0]["duration"]["secs"], 1);
    assert_eq!(json[0]["duration"]["nanos"], 500_000_000);
}
