use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Outcome of one executed test.
///
/// A fresh result is failing until the runner sets `pass`. Errors are
/// append-only and keep call order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestResult {
    /// Test identifier
    pub name: String,
    /// Outcome flag, independent of `errors`
    #[serde(default)]
    pub pass: bool,
    /// Captured standard output
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stdout: String,
    /// Captured standard error
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stderr: String,
    /// Failure messages in the order they were recorded
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Wall-clock time spent in the test
    #[serde(default, with = "super::duration_nanos")]
    pub duration: Duration,
}

impl TestResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Record one failure message.
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Record one failure message built from `format_args!`.
    pub fn errorf(&mut self, args: fmt::Arguments<'_>) {
        self.errors.push(fmt::format(args));
    }

    pub fn fail(&mut self) {
        self.pass = false;
    }

    pub fn is_pass(&self) -> bool {
        self.pass
    }

    /// False when the result claims to pass but carries errors.
    pub fn is_consistent(&self) -> bool {
        !(self.pass && !self.errors.is_empty())
    }

    /// Whether reports count this result as a failure: either the flag
    /// is unset or at least one error was recorded.
    pub fn is_failing(&self) -> bool {
        !self.pass || !self.errors.is_empty()
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_pass() { "Pass" } else { "Fail" };

        write!(f, "\nTest Name:{}", self.name)?;
        write!(f, "\nTest Status:{}", status)?;
        if !self.stdout.is_empty() {
            write!(f, "\nStdout:{}", self.stdout)?;
        }
        if !self.stderr.is_empty() {
            write!(f, "\nStderr:{}", self.stderr)?;
        }
        write!(f, "\nErrors:{}\n", self.errors.join(","))?;
        write!(f, "\nDuration:{:?}\n", self.duration)
    }
}
