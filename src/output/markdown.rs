//! Markdown report and issue body generation
//!
//! This module renders run results as markdown, including:
//! - The link validation report written after every run
//! - The issue body attached to the failure analysis

use crate::analysis::{FailedLink, ValidatedReplacement};
use crate::output::traits::{write_file, OutputResult, ReportSink, RunReport};
use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Markdown report written to a file
#[derive(Debug, Clone)]
pub struct MarkdownReport {
    path: String,
    title: String,
}

impl MarkdownReport {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
        }
    }
}

impl ReportSink for MarkdownReport {
    fn destination(&self) -> &str {
        &self.path
    }

    fn write_report(&self, report: &RunReport<'_>) -> OutputResult<()> {
        write_file(&self.path, &format_report(report, &self.title))
    }
}

/// Formats the run as a markdown report
///
/// # Arguments
///
/// * `report` - The run data
/// * `title` - Top-level heading
///
/// # Returns
///
/// A formatted markdown string
pub fn format_report(report: &RunReport<'_>, title: &str) -> String {
    let summary = &report.summary;
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", title));
    md.push_str(&format!(
        "**Generated:** {}\n",
        report.generated_at.format(TIMESTAMP_FORMAT)
    ));
    md.push_str(&format!("**Total Links Checked:** {}\n", summary.total_links));
    md.push_str(&format!("**Passed Links:** {}\n", summary.passed));
    md.push_str(&format!("**Failed Links:** {}\n", summary.failed));
    md.push_str(&format!("**Skipped Links:** {}\n", summary.skipped));
    if summary.errored > 0 {
        md.push_str(&format!("**Errored Links:** {}\n", summary.errored));
    }
    md.push_str(&format!("**Success Rate:** {}%\n\n", summary.success_rate()));

    md.push_str("## Module Summary\n\n");
    for module in report.modules {
        let icon = if module.has_failures() { "❌" } else { "✅" };
        md.push_str(&format!(
            "- {} **{}**: {} links ({} passed, {} failed, {} skipped)\n",
            icon,
            module.module_name,
            module.total_links,
            module.passed_links,
            module.failed_links,
            module.skipped_links
        ));
    }

    if summary.has_failures() {
        md.push_str(&format!("\n## ❌ Failed Links ({})\n\n", summary.failed));
        for module in report.modules.iter().filter(|m| m.has_failures()) {
            md.push_str(&format!("### {}\n\n", module.module_name));
            for link in module.failures() {
                md.push_str(&format!("- ❌ {}\n", link.url));
                md.push_str(&format!(
                    "  - **Error**: {}\n",
                    link.error_message.as_deref().unwrap_or("unknown")
                ));
                if let Some(code) = link.status_code {
                    md.push_str(&format!("  - **Status Code**: {}\n", code));
                }
                md.push_str(&format!(
                    "  - **Response Time**: {:.2}s\n\n",
                    link.response_time
                ));
            }
        }
    }

    if let Some(analysis) = report.analysis {
        md.push_str("\n## Analysis\n\n");
        md.push_str(&analysis.analysis);
        md.push('\n');

        if !analysis.validated_replacements.is_empty() {
            md.push_str("\n## ✅ Validated Replacement URLs\n\n");
            md.push_str(&format_replacements(&analysis.validated_replacements));
        }

        md.push_str("\n## Recommendations\n\n");
        for (i, recommendation) in analysis.recommendations.iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, recommendation));
        }

        md.push_str("\n## Impact Assessment\n\n");
        md.push_str(&analysis.impact_assessment);
        md.push('\n');
    }

    md.push_str("\n---\n");
    md.push_str("*Report generated by doclink-audit*\n");

    md
}

fn format_replacements(replacements: &[ValidatedReplacement]) -> String {
    let mut md = String::new();
    for replacement in replacements {
        md.push_str(&format!("### {}\n", replacement.original_url));
        md.push_str(&format!(
            "**✅ Replacement Found:** `{}`\n",
            replacement.replacement_url
        ));
        md.push_str(&format!("- **Confidence:** {}\n", replacement.confidence));
        md.push_str(&format!("- **Validation:** {}\n", replacement.validation_method));
        md.push_str(&format!("- **Description:** {}\n\n", replacement.description));
    }
    md
}

/// Formats the body of the broken-links issue
///
/// Broken links are grouped by module in order of first appearance.
pub fn format_issue_body(
    failed_links: &[FailedLink],
    analysis: &str,
    replacements: &[ValidatedReplacement],
    workshop_context: &str,
    generated_at: DateTime<Local>,
) -> String {
    let mut md = String::new();

    md.push_str("# 🔗 Broken Documentation Links Report\n\n");
    md.push_str(&format!(
        "**Generated:** {}\n",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
    if !workshop_context.is_empty() {
        md.push_str(&format!("**Workshop:** {}\n", workshop_context));
    }
    md.push_str(&format!("**Failed Links:** {}\n", failed_links.len()));
    md.push_str(&format!(
        "**Validated Replacements Found:** {}\n\n",
        replacements.len()
    ));

    md.push_str("## Analysis\n\n");
    md.push_str(analysis);
    md.push_str("\n\n## ✅ Validated Replacement URLs\n\n");
    if replacements.is_empty() {
        md.push_str("No validated replacements found through automated search.\n\n");
    } else {
        md.push_str(&format_replacements(replacements));
    }

    md.push_str("## 📋 Broken Links Details\n\n");
    let mut modules: Vec<&str> = Vec::new();
    for link in failed_links {
        if !modules.contains(&link.module.as_str()) {
            modules.push(&link.module);
        }
    }
    for module in modules {
        md.push_str(&format!("### {}\n\n", module));
        for link in failed_links.iter().filter(|l| l.module == module) {
            md.push_str(&format!("- ❌ `{}`\n", link.url));
            md.push_str(&format!(
                "  - **Error**: {}\n",
                link.error.as_deref().unwrap_or("unknown")
            ));
            if let Some(code) = link.status_code {
                md.push_str(&format!("  - **Status Code**: {}\n", code));
            }
            md.push('\n');
        }
    }

    md.push_str(
        "## 🔧 Next Steps\n\n\
         1. Review the analysis above for patterns and recommendations\n\
         2. Update broken links according to the suggested fixes\n\
         3. Run the link checker again to verify fixes: `doclink-audit`\n\
         4. Close this issue once all links are working\n\n\
         ---\n\
         *This issue was created automatically by doclink-audit*\n",
    );

    md
}
