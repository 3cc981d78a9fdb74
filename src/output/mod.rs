//! Output module for run reports
//!
//! This module handles:
//! - Run totals and the success rate
//! - The markdown report and the issue body
//! - The JSON report

mod json;
mod markdown;
pub mod stats;
mod traits;

pub use json::{format_json, JsonReport};
pub use markdown::{format_issue_body, format_report, MarkdownReport};
pub use stats::{print_summary, RunSummary};
pub use traits::{OutputError, OutputResult, ReportSink, RunReport};

use crate::config::OutputConfig;

/// Builds the sinks configured for this run
///
/// The markdown report is always written; the JSON report only when a path is
/// configured.
pub fn configured_sinks(output: &OutputConfig) -> Vec<Box<dyn ReportSink>> {
    let mut sinks: Vec<Box<dyn ReportSink>> = vec![Box::new(MarkdownReport::new(
        output.report_file.clone(),
        output.report_title.clone(),
    ))];

    if let Some(path) = &output.json_file {
        sinks.push(Box::new(JsonReport::new(path.clone())));
    }

    sinks
}

/// Writes the report to every sink
pub fn write_reports(sinks: &[Box<dyn ReportSink>], report: &RunReport<'_>) -> OutputResult<()> {
    for sink in sinks {
        sink.write_report(report)?;
        tracing::info!("Report generated: {}", sink.destination());
    }
    Ok(())
}
