//! Test record types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One observed test execution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    /// Test name as reported by the runner
    pub name: String,
    /// Elapsed time from the end marker (zero if none was seen)
    pub duration: Duration,
    /// Output lines attributed to this test, each terminated by `\n`
    pub message: String,
    /// Whether the last end marker for this test was a failure
    pub failed: bool,
}

impl Test {
    /// Create a freshly started test with no output and no timing
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Check if the test passed (or never reported an outcome)
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.failed
    }

    /// Outcome of the test
    #[must_use]
    pub fn outcome(&self) -> TestOutcome {
        if self.failed {
            TestOutcome::Failed
        } else {
            TestOutcome::Passed
        }
    }

    /// Iterate over the captured output, one entry per original line
    pub fn message_lines(&self) -> impl Iterator<Item = &str> {
        self.message.lines()
    }

    /// Human-readable duration: `5ms` below one second, `2.50s` otherwise
    #[must_use]
    pub fn duration_display(&self) -> String {
        format_duration(self.duration)
    }
}

/// Possible test outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestOutcome {
    /// Test passed
    Passed,
    /// Test failed
    Failed,
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => f.write_str("pass"),
            Self::Failed => f.write_str("fail"),
        }
    }
}

/// Aggregated counts over a parsed run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of tests seen
    pub total: usize,
    /// Tests that passed
    pub passed: usize,
    /// Tests that failed
    pub failed: usize,
    /// Sum of all reported durations
    pub total_duration: Duration,
}

impl RunSummary {
    /// Summarise a parsed run
    #[must_use]
    pub fn from_tests(tests: &[Test]) -> Self {
        let failed = tests.iter().filter(|t| t.failed).count();
        Self {
            total: tests.len(),
            passed: tests.len() - failed,
            failed,
            total_duration: tests
                .iter()
                .fold(Duration::ZERO, |acc, t| acc.saturating_add(t.duration)),
        }
    }

    /// Check if all tests passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tests, {} passed, {} failed ({})",
            self.total,
            self.passed,
            self.failed,
            format_duration(self.total_duration)
        )
    }
}

/// Get failing tests, in parse order
#[must_use]
pub fn failing_tests(tests: &[Test]) -> Vec<&Test> {
    tests.iter().filter(|t| t.failed).collect()
}

fn format_duration(duration: Duration) -> String {
    if duration < Duration::from_secs(1) {
        format!("{}ms", duration.as_millis())
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
