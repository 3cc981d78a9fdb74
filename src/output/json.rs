use crate::analysis::IntelligentAnalysis;
use crate::output::traits::{write_file, OutputResult, ReportSink, RunReport};
use crate::output::RunSummary;
use crate::results::ModuleResult;
use serde::Serialize;

/// Serialized shape of the JSON report
#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    generated_at: String,
    config_hash: Option<&'a str>,
    summary: RunSummary,
    success_rate: usize,
    modules: &'a [ModuleResult],
    analysis: Option<&'a IntelligentAnalysis>,
}

/// Pretty JSON report with every module and link result
#[derive(Debug, Clone)]
pub struct JsonReport {
    path: String,
}

impl JsonReport {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Renders the run as pretty JSON
pub fn format_json(report: &RunReport<'_>) -> OutputResult<String> {
    let document = JsonDocument {
        generated_at: report.generated_at.to_rfc3339(),
        config_hash: report.config_hash,
        summary: report.summary,
        success_rate: report.summary.success_rate(),
        modules: report.modules,
        analysis: report.analysis,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

impl ReportSink for JsonReport {
    fn destination(&self) -> &str {
        &self.path
    }

    fn write_report(&self, report: &RunReport<'_>) -> OutputResult<()> {
        write_file(&self.path, &format_json(report)?)
    }
}
