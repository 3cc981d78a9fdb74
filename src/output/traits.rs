//! Report sink trait and the run data handed to every sink

use crate::analysis::IntelligentAnalysis;
use crate::output::RunSummary;
use crate::results::ModuleResult;
use chrono::{DateTime, Local};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Everything a report is rendered from
///
/// Borrowed from the run; a sink reads it and never changes it.
#[derive(Debug, Clone, Copy)]
pub struct RunReport<'a> {
    pub generated_at: DateTime<Local>,

    /// SHA-256 of the configuration file, when one was loaded
    pub config_hash: Option<&'a str>,

    pub summary: RunSummary,
    pub modules: &'a [ModuleResult],
    pub analysis: Option<&'a IntelligentAnalysis>,
}

impl<'a> RunReport<'a> {
    pub fn new(
        modules: &'a [ModuleResult],
        analysis: Option<&'a IntelligentAnalysis>,
        config_hash: Option<&'a str>,
    ) -> Self {
        Self {
            generated_at: Local::now(),
            config_hash,
            summary: RunSummary::from_modules(modules),
            modules,
            analysis,
        }
    }
}

/// Trait for report destinations
pub trait ReportSink {
    /// Where the report goes, for log messages
    fn destination(&self) -> &str;

    /// Renders and writes the report
    fn write_report(&self, report: &RunReport<'_>) -> OutputResult<()>;
}

/// Writes `contents` to `path`, mapping failures to `OutputError::Write`
pub(crate) fn write_file(path: &str, contents: &str) -> OutputResult<()> {
    std::fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_string(),
        source,
    })
}
