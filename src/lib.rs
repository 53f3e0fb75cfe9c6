//! imagetest - container image test reporting library
//!
//! This library exposes the data model shared by image test runners:
//! image and run settings, per-test results, the run summary, and the
//! text/JSON/JUnit renderers used to report them.

pub mod config;
pub mod constants;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod output;
