//! Data models module
//!
//! Defines core data structures:
//! - EnvVar, Label, Config, ContainerRunOptions: image and run settings
//! - OutputValue: report format selector
//! - TestResult: outcome of one executed test
//! - SummaryObject: roll-up of a whole test run
//! - JUnitTestSuite, JUnitTestCase: JUnit-native report shape

mod format;
mod junit;
mod result;
mod settings;
mod summary;


pub use format::OutputValue;
pub use junit::{JUnitTestCase, JUnitTestSuite};
pub use result::TestResult;
pub use settings::{Config, ContainerRunOptions, EnvVar, Label};
pub use summary::SummaryObject;

use crate::constants::FORMAT_NAMES;

/// Errors raised while building or validating report data
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("unsupported format {0}: please select from `text`, `json`, or `junit`")]
    UnsupportedFormat(String),

    #[error("summary counts do not reconcile: pass={pass} fail={fail} total={total} results={results}")]
    CountMismatch {
        pass: usize,
        fail: usize,
        total: usize,
        results: usize,
    },

    #[error("{kind} is missing its key")]
    MissingKey { kind: &'static str },

    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl ReportError {
    /// The canonical format names a caller may choose from
    pub fn valid_formats() -> &'static [&'static str] {
        &FORMAT_NAMES
    }
}

/// Durations travel as integer nanoseconds on the wire.
pub(crate) mod duration_nanos {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(as_nanos(duration))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let nanos = u64::deserialize(deserializer)?;
        Ok(Duration::from_nanos(nanos))
    }

    /// Saturates at u64::MAX (about 584 years)
    pub fn as_nanos(duration: &Duration) -> u64 {
        u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
    }
}
