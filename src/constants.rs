//! Global constants for imagetest
//!
//! Centralized location for application-wide constants

/// Application name, used for the config directory and CLI
pub const APP_NAME: &str = "imagetest";

/// Report configuration file name inside the user config directory
pub const CONFIG_FILE_NAME: &str = "report.toml";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "IMAGETEST_LOG";

/// Canonical names of the supported report formats, in ordinal order
pub const FORMAT_NAMES: [&str; 3] = ["text", "json", "junit"];

/// Root element of the summary XML report
pub const XML_ROOT_ELEMENT: &str = "testsuites";

/// XML declaration emitted at the top of every XML report
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
