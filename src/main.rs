#![forbid(unsafe_code)]

mod cli;

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use imagetest::config::ReportConfig;
use imagetest::logging::{self, LogLevel};
use imagetest::models::SummaryObject;
use imagetest::output;

/// Exit code when the report contains failed tests
const EXIT_TESTS_FAILED: u8 = 1;
/// Exit code for usage, input or rendering errors
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_TESTS_FAILED),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Returns whether every test in the report passed.
fn run() -> Result<bool> {
    let args = cli::parse_args();
    logging::init(LogLevel::from_flags(args.quiet, args.verbose))?;

    let config = ReportConfig::resolve(args.config.as_deref())?;
    let format = args.output.unwrap_or(config.report.output);
    let mut opts = config.render_options();
    if args.junit_suite.is_some() {
        opts.junit_suite = args.junit_suite.clone();
    }
    if args.no_summary {
        opts.text_summary = false;
    }

    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read report {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read report from stdin")?;
            buf
        }
    };

    let mut summary: SummaryObject =
        serde_json::from_str(&raw).context("Report is not a valid JSON summary")?;
    info!("loaded report with {} results", summary.results.len());

    if let Err(err) = summary.validate() {
        warn!("{}", err);
        if !summary.results.is_empty() {
            warn!("recomputing counts from the recorded results");
            summary.recount();
        }
    }
    for result in summary.results.iter().filter(|r| !r.is_consistent()) {
        warn!("test '{}' is marked passing but recorded errors", result.name);
    }

    let rendered = output::render(format, &summary, &opts)?;
    print!("{}", rendered);

    Ok(summary.all_passed())
}
