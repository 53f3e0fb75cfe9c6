//! Output formatting module
//!
//! Handles:
//! - Human-readable text blocks, one per test, with an optional footer
//! - JSON reports built from the serde shape of SummaryObject
//! - JUnit XML, either the summary shape or the JUnit-native suite shape
//!
//! XML field visibility differs from JSON: the summary's `Pass` count and
//! each result's captured streams never reach the summary XML.

use anyhow::{Context, Result};
use log::debug;

use crate::constants::XML_ROOT_ELEMENT;
use crate::models::{duration_nanos, JUnitTestSuite, OutputValue, SummaryObject};

pub mod xml;

use xml::XmlWriter;

/// Knobs for a single render
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Render JUnit output as a JUnit-native suite with this name
    pub junit_suite: Option<String>,
    /// Append the totals footer to text output
    pub text_summary: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            junit_suite: None,
            text_summary: true,
        }
    }
}

/// Render `summary` in the selected format.
pub fn render(format: OutputValue, summary: &SummaryObject, opts: &RenderOptions) -> Result<String> {
    debug!("rendering {} results as {}", summary.results.len(), format);
    match format {
        OutputValue::Text => Ok(format_text(summary, opts.text_summary)),
        OutputValue::Json => format_json(summary),
        OutputValue::Junit => match &opts.junit_suite {
            Some(name) => Ok(format_junit_suite(&JUnitTestSuite::from_results(
                name.as_str(),
                &summary.results,
            ))),
            None => Ok(format_junit(summary)),
        },
    }
}

/// Per-test blocks in result order, optionally followed by totals.
pub fn format_text(summary: &SummaryObject, with_footer: bool) -> String {
    let mut out: String = summary.results.iter().map(|r| r.to_string()).collect();

    if with_footer {
        out.push_str("\n=========================================");
        out.push_str("\n================ RESULTS ================");
        out.push_str("\n=========================================");
        out.push_str(&format!("\nPasses:      {}", summary.pass));
        out.push_str(&format!("\nFailures:    {}", summary.fail));
        out.push_str(&format!("\nDuration:    {:?}", summary.duration));
        out.push_str(&format!("\nTotal tests: {}\n", summary.total));
        out.push_str(if summary.all_passed() { "\nPASS\n" } else { "\nFAIL\n" });
    }

    out
}

pub fn format_json(summary: &SummaryObject) -> Result<String> {
    serde_json::to_string_pretty(summary).context("Failed to serialize report as JSON")
}

/// Summary shape: `<testsuites failures tests time>` holding a single
/// `<testsuite>` of `<testcase name time>` elements. Times are integer
/// nanoseconds.
pub fn format_junit(summary: &SummaryObject) -> String {
    let mut w = XmlWriter::new();
    w.open(
        XML_ROOT_ELEMENT,
        &[
            ("failures", summary.fail.to_string()),
            ("tests", summary.total.to_string()),
            ("time", duration_nanos::as_nanos(&summary.duration).to_string()),
        ],
    );

    if !summary.results.is_empty() {
        w.open("testsuite", &[]);
        for result in &summary.results {
            let attrs = [
                ("name", result.name.clone()),
                ("time", duration_nanos::as_nanos(&result.duration).to_string()),
            ];
            if result.errors.is_empty() {
                w.empty("testcase", &attrs);
                continue;
            }
            w.open("testcase", &attrs);
            for error in &result.errors {
                w.text_element("failure", error);
            }
            w.close("testcase");
        }
        w.close("testsuite");
    }

    w.close(XML_ROOT_ELEMENT);
    w.finish()
}

/// JUnit-native shape: one `<testsuite>` with seconds as decimal times
/// and captured output in `<system-out>`/`<system-err>`.
pub fn format_junit_suite(suite: &JUnitTestSuite) -> String {
    let mut w = XmlWriter::new();
    w.open(
        XML_ROOT_ELEMENT,
        &[
            ("failures", suite.failures().to_string()),
            ("tests", suite.results.len().to_string()),
            ("time", format_seconds(suite.time())),
        ],
    );
    w.open(
        "testsuite",
        &[
            ("name", suite.name.clone()),
            ("tests", suite.results.len().to_string()),
            ("failures", suite.failures().to_string()),
            ("time", format_seconds(suite.time())),
        ],
    );

    for case in &suite.results {
        let attrs = [("name", case.name.clone()), ("time", format_seconds(case.duration))];
        if case.errors.is_empty() && case.stdout.is_empty() && case.stderr.is_empty() {
            w.empty("testcase", &attrs);
            continue;
        }
        w.open("testcase", &attrs);
        for error in &case.errors {
            w.text_element("failure", error);
        }
        if !case.stdout.is_empty() {
            w.text_element("system-out", &case.stdout);
        }
        if !case.stderr.is_empty() {
            w.text_element("system-err", &case.stderr);
        }
        w.close("testcase");
    }

    w.close("testsuite");
    w.close(XML_ROOT_ELEMENT);
    w.finish()
}

/// Millisecond precision is what JUnit consumers display.
fn format_seconds(seconds: f64) -> String {
    format!("{:.3}", seconds)
}
