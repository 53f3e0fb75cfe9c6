use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ReportError, TestResult};

/// Roll-up of a whole test run.
///
/// Callers that fill the counts by hand must keep
/// `total == pass + fail == results.len()`; `from_results` and `push`
/// do it for them and `validate` checks it. A result with recorded
/// errors counts as failed even when its `pass` flag is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryObject {
    pub pass: usize,
    pub fail: usize,
    pub total: usize,
    #[serde(with = "super::duration_nanos")]
    pub duration: Duration,
    /// Results in collection order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<TestResult>,
}

impl SummaryObject {
    /// Build a summary whose counts and duration derive from `results`.
    pub fn from_results(results: Vec<TestResult>) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.push(result);
        }
        summary
    }

    /// Append one result, updating counts and the summed duration.
    pub fn push(&mut self, result: TestResult) {
        if result.is_failing() {
            self.fail += 1;
        } else {
            self.pass += 1;
        }
        self.total += 1;
        self.duration = self.duration.saturating_add(result.duration);
        self.results.push(result);
    }

    /// Recompute the counts from `results`, keeping `duration`.
    pub fn recount(&mut self) {
        self.fail = self.results.iter().filter(|r| r.is_failing()).count();
        self.total = self.results.len();
        self.pass = self.total - self.fail;
        debug!(
            "recounted summary: pass={} fail={} total={}",
            self.pass, self.fail, self.total
        );
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        let failing = self.results.iter().filter(|r| r.is_failing()).count();
        let reconciles = self.pass.checked_add(self.fail) == Some(self.total)
            && self.total == self.results.len()
            && self.fail == failing;
        if reconciles {
            Ok(())
        } else {
            Err(ReportError::CountMismatch {
                pass: self.pass,
                fail: self.fail,
                total: self.total,
                results: self.results.len(),
            })
        }
    }

    pub fn all_passed(&self) -> bool {
        self.fail == 0 && !self.results.iter().any(TestResult::is_failing)
    }
}
