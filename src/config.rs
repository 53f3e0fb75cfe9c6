//! Report configuration
//!
//! Handles TOML configuration parsing. Command-line flags override any
//! value read from the file.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_NAME, CONFIG_FILE_NAME};
use crate::models::OutputValue;
use crate::output::RenderOptions;

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub report: ReportSettings,
}

/// `[report]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Output format used when `--output` is not given
    pub output: OutputValue,
    /// Render JUnit reports as a named JUnit-native suite
    pub junit_suite: Option<String>,
    /// Append the totals footer to text reports
    pub text_summary: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output: OutputValue::default(),
            junit_suite: None,
            text_summary: true,
        }
    }
}

impl ReportConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ReportConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// `<config dir>/imagetest/report.toml`, if a config dir exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load `explicit` if given, else the default file when present,
    /// else built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            junit_suite: self.report.junit_suite.clone(),
            text_summary: self.report.text_summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full_config() {
        let config: ReportConfig = toml::from_str(
            r#"
[report]
output = "junit"
junit_suite = "image-tests"
text_summary = false
"#,
        )
        .unwrap();

        assert_eq!(config.report.output, OutputValue::Junit);
        assert_eq!(config.report.junit_suite.as_deref(), Some("image-tests"));
        assert!(!config.report.text_summary);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ReportConfig = toml::from_str("").unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.report.output, OutputValue::Text);
        assert!(config.render_options().text_summary);
    }

    #[test]
    fn test_unknown_output_rejected() {
        let result = toml::from_str::<ReportConfig>("[report]\noutput = \"xml\"\n");
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("xml"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.toml");
        fs::write(&path, "[report]\noutput = \"json\"\n").unwrap();

        let config = ReportConfig::resolve(Some(&path)).unwrap();
        assert_eq!(config.report.output, OutputValue::Json);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        let err = ReportConfig::load_from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
