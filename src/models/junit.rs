use serde::{Deserialize, Serialize};

use super::TestResult;

/// JUnit-native suite: one named suite of test cases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JUnitTestSuite {
    pub name: String,
    pub results: Vec<JUnitTestCase>,
}

/// JUnit-native test case with duration in seconds and captured output
/// carried as child elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JUnitTestCase {
    pub name: String,
    pub errors: Vec<String>,
    /// Seconds
    pub duration: f64,
    pub stdout: String,
    pub stderr: String,
    /// Counted as a failure, see `TestResult::is_failing`
    #[serde(default)]
    pub failed: bool,
}

impl JUnitTestSuite {
    pub fn from_results(name: impl Into<String>, results: &[TestResult]) -> Self {
        Self {
            name: name.into(),
            results: results.iter().map(JUnitTestCase::from).collect(),
        }
    }

    pub fn failures(&self) -> usize {
        self.results.iter().filter(|c| c.failed).count()
    }

    /// Sum of case durations, in seconds
    pub fn time(&self) -> f64 {
        self.results.iter().map(|c| c.duration).sum()
    }
}

impl From<&TestResult> for JUnitTestCase {
    fn from(result: &TestResult) -> Self {
        Self {
            name: result.name.clone(),
            errors: result.errors.clone(),
            duration: result.duration.as_secs_f64(),
            stdout: result.stdout.clone(),
            stderr: result.stderr.clone(),
            failed: result.is_failing(),
        }
    }
}
