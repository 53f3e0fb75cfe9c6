//! CLI argument parsing and validation module
//!
//! Handles command-line interface using clap, including:
//! - Report input selection (file or stdin)
//! - Output format selection (text/JSON/JUnit)
//! - JUnit suite naming
//! - Configuration file override
//! - Verbosity and quiet modes

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use imagetest::models::OutputValue;

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    /// Stored JSON report; `None` reads stdin
    pub input: Option<PathBuf>,
    /// Explicit format; `None` defers to the config file
    pub output: Option<OutputValue>,
    pub junit_suite: Option<String>,
    pub config: Option<PathBuf>,
    pub no_summary: bool,
    pub quiet: bool,
    pub verbose: bool,
}

pub fn build_command() -> Command {
    let formats = OutputValue::ALL.map(OutputValue::as_str).join(", ");

    Command::new("imagetest")
        .version(concat!(env!("IMAGETEST_VERSION"), " (", env!("GIT_HASH"), ")"))
        .about("Render container image test results as text, JSON or JUnit XML")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("JSON report to render ('-' or omitted reads stdin)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name(OutputValue::type_name())
                .help(format!("Output format ({})", formats))
                .value_parser(|s: &str| s.parse::<OutputValue>()),
        )
        .arg(
            Arg::new("junit-suite")
                .long("junit-suite")
                .value_name("NAME")
                .help("Emit JUnit output as a named JUnit-native test suite"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Report configuration file (TOML)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("no-summary")
                .long("no-summary")
                .help("Omit the totals footer from text output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug details to stderr")
                .action(ArgAction::SetTrue),
        )
}

/// Parse command line arguments
pub fn parse_args() -> CliArgs {
    from_matches(&build_command().get_matches())
}

fn from_matches(matches: &ArgMatches) -> CliArgs {
    let input = matches
        .get_one::<PathBuf>("input")
        .filter(|p| p.as_os_str() != "-")
        .cloned();

    CliArgs {
        input,
        output: matches.get_one::<OutputValue>("output").copied(),
        junit_suite: matches.get_one::<String>("junit-suite").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        no_summary: matches.get_flag("no-summary"),
        quiet: matches.get_flag("quiet"),
        verbose: matches.get_flag("verbose"),
    }
}
