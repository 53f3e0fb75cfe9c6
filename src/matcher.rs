//! Matching for expected environment variables and labels
//!
//! Values are compared literally unless the record is flagged as a
//! regex, in which case the pattern may match anywhere in the value.
//! Labels flagged as regex match their key as a pattern too.

use regex::Regex;
use std::collections::BTreeMap;

use crate::models::{Config, EnvVar, Label, ReportError};

fn compile(pattern: &str) -> Result<Regex, ReportError> {
    Regex::new(pattern).map_err(|e| ReportError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Compare `actual` against `expected`, literally or as a regex.
pub fn matches_value(expected: &str, actual: &str, is_regex: bool) -> Result<bool, ReportError> {
    if is_regex {
        Ok(compile(expected)?.is_match(actual))
    } else {
        Ok(expected == actual)
    }
}

impl EnvVar {
    pub fn matches(&self, actual: &str) -> Result<bool, ReportError> {
        if self.key.is_empty() {
            return Err(ReportError::MissingKey { kind: "environment variable" });
        }
        matches_value(&self.value, actual, self.is_regex)
    }
}

impl Label {
    pub fn matches(&self, key: &str, value: &str) -> Result<bool, ReportError> {
        if self.key.is_empty() {
            return Err(ReportError::MissingKey { kind: "label" });
        }
        Ok(matches_value(&self.key, key, self.is_regex)?
            && matches_value(&self.value, value, self.is_regex)?)
    }

    /// First label in `labels` (key order) this expectation matches.
    pub fn find_in<'a>(
        &self,
        labels: &'a BTreeMap<String, String>,
    ) -> Result<Option<(&'a String, &'a String)>, ReportError> {
        if self.key.is_empty() {
            return Err(ReportError::MissingKey { kind: "label" });
        }
        if !self.is_regex {
            let found = labels.get_key_value(&self.key);
            return match found {
                Some((k, v)) if v == &self.value => Ok(Some((k, v))),
                _ => Ok(None),
            };
        }
        for (k, v) in labels {
            if self.matches(k, v)? {
                return Ok(Some((k, v)));
            }
        }
        Ok(None)
    }
}

impl Config {
    /// Whether the image declares `var` with a matching value.
    pub fn env_var_matches(&self, var: &EnvVar) -> Result<bool, ReportError> {
        match self.env.get(&var.key) {
            Some(actual) => var.matches(actual),
            None if var.key.is_empty() => Err(ReportError::MissingKey { kind: "environment variable" }),
            None => Ok(false),
        }
    }

    pub fn label_matches(&self, label: &Label) -> Result<bool, ReportError> {
        Ok(label.find_in(&self.labels)?.is_some())
    }
}
