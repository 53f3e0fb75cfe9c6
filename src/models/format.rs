use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ReportError;

/// Report format chosen once at startup and passed by value to the
/// output layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputValue {
    /// Human-readable blocks, one per test
    #[default]
    Text,
    /// Pretty-printed JSON summary
    Json,
    /// JUnit XML
    Junit,
}

impl OutputValue {
    /// Every variant, in ordinal order
    pub const ALL: [OutputValue; 3] = [OutputValue::Text, OutputValue::Json, OutputValue::Junit];

    /// Canonical lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            OutputValue::Text => "text",
            OutputValue::Json => "json",
            OutputValue::Junit => "junit",
        }
    }

    /// Value type shown by flag parsers next to the option name.
    pub fn type_name() -> &'static str {
        "string"
    }

    /// Replace the current value with the one named by `value`.
    ///
    /// On error `self` is left untouched.
    pub fn set(&mut self, value: &str) -> Result<(), ReportError> {
        *self = value.parse()?;
        Ok(())
    }
}

impl fmt::Display for OutputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputValue {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(OutputValue::Text),
            "json" => Ok(OutputValue::Json),
            "junit" => Ok(OutputValue::Junit),
            other => Err(ReportError::UnsupportedFormat(other.to_string())),
        }
    }
}
