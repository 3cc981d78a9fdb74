//! Run-level failure analysis
//!
//! Collects every FAIL result, looks for replacements, asks the text
//! generator for an analysis and assembles the `IntelligentAnalysis`. Each
//! collaborator is optional and any failure degrades to less content, never
//! to an aborted run.

use crate::analysis::{
    build_prompt, summarize, FailedLink, IntelligentAnalysis, Summary, TextGenerator,
    ValidatedReplacement, SYSTEM_PREAMBLE,
};
use crate::checker::RunContext;
use crate::output::format_issue_body;
use crate::replacement::{ReplacementFinder, SearchProvider};
use crate::results::ModuleResult;
use chrono::Local;

/// Analysis text used when no text generator is available or it failed
pub const NO_ANALYSIS: &str = "No AI analysis available.";

/// Every FAIL result across the run, tagged with its module
pub fn collect_failed_links(modules: &[ModuleResult]) -> Vec<FailedLink> {
    modules
        .iter()
        .flat_map(|module| {
            module.failures().map(|link| FailedLink {
                module: module.module_name.clone(),
                url: link.url.clone(),
                error: link.error_message.clone(),
                status_code: link.status_code,
            })
        })
        .collect()
}

/// Title of the broken-links issue
pub fn issue_title(failures: usize) -> String {
    format!(
        "🔗 Broken Documentation Links Detected - {} failures",
        failures
    )
}

pub struct Analyzer<'a> {
    ctx: &'a RunContext,
    search: Option<&'a dyn SearchProvider>,
    generator: Option<&'a dyn TextGenerator>,
}

impl<'a> Analyzer<'a> {
    pub fn new(
        ctx: &'a RunContext,
        search: Option<&'a dyn SearchProvider>,
        generator: Option<&'a dyn TextGenerator>,
    ) -> Self {
        Self {
            ctx,
            search,
            generator,
        }
    }

    /// Builds the analysis, or None when no link failed
    pub async fn analyze(&self, modules: &[ModuleResult]) -> Option<IntelligentAnalysis> {
        let failed_links = collect_failed_links(modules);
        if failed_links.is_empty() {
            return None;
        }

        let replacements = self.find_replacements(&failed_links).await;
        let workshop_context = &self.ctx.config().analysis.workshop_context;

        let (analysis, summary) = match self
            .generate(workshop_context, modules.len(), &failed_links, &replacements)
            .await
        {
            Some(text) => {
                let summary = summarize(&text);
                (text, summary)
            }
            None => (NO_ANALYSIS.to_string(), Summary::default()),
        };

        let github_issue_body = format_issue_body(
            &failed_links,
            &analysis,
            &replacements,
            workshop_context,
            Local::now(),
        );

        Some(IntelligentAnalysis {
            broken_links: failed_links.iter().map(|l| l.url.clone()).collect(),
            analysis,
            recommendations: summary.recommendations,
            impact_assessment: summary.impact_assessment,
            github_issue_title: issue_title(failed_links.len()),
            github_issue_body,
            validated_replacements: replacements,
        })
    }

    async fn find_replacements(&self, failed_links: &[FailedLink]) -> Vec<ValidatedReplacement> {
        let Some(search) = self.search else {
            return Vec::new();
        };

        let finder = match ReplacementFinder::new(self.ctx, search) {
            Ok(finder) => finder,
            Err(e) => {
                tracing::warn!("Replacement search unavailable: {}", e);
                return Vec::new();
            }
        };

        tracing::info!("Searching for validated replacement URLs...");
        finder
            .find_all(failed_links.iter().map(|l| l.url.as_str()))
            .await
    }

    /// Text from the generator, or None when it is absent or failed
    async fn generate(
        &self,
        workshop_context: &str,
        total_modules: usize,
        failed_links: &[FailedLink],
        replacements: &[ValidatedReplacement],
    ) -> Option<String> {
        let generator = self.generator?;

        let prompt = match build_prompt(workshop_context, total_modules, failed_links, replacements) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::warn!("Failed to build analysis prompt: {}", e);
                return None;
            }
        };

        match generator.generate(SYSTEM_PREAMBLE, &prompt).await {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => {
                tracing::warn!("AI analysis returned no text");
                None
            }
            Err(e) => {
                tracing::warn!("AI analysis failed: {}", e);
                None
            }
        }
    }
}
