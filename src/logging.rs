//! Logging setup
//!
//! Everything logs through the `log` facade; the binary installs
//! `env_logger` on stderr so reports on stdout stay clean.

use anyhow::{anyhow, Result};
use log::LevelFilter;

use crate::constants::LOG_ENV_VAR;

/// Verbosity requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Quiet,
    Normal,
    Verbose,
}

impl LogLevel {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => LogLevel::Quiet,
            (false, true) => LogLevel::Verbose,
            (false, false) => LogLevel::Normal,
        }
    }

    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Quiet => LevelFilter::Error,
            LogLevel::Normal => LevelFilter::Warn,
            LogLevel::Verbose => LevelFilter::Debug,
        }
    }
}

/// Install the global logger. `IMAGETEST_LOG` overrides `level`.
pub fn init(level: LogLevel) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level.filter())
        .parse_env(LOG_ENV_VAR)
        .format_timestamp(None)
        .try_init()
        .map_err(|e| anyhow!("Failed to set logger: {}", e))
}
