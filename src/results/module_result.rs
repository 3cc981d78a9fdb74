use crate::results::link_result::{LinkResult, LinkStatus};
use serde::{Deserialize, Serialize};

/// Aggregated outcome of checking one document
///
/// `total_links == passed_links + failed_links + skipped_links + errored_links()`
/// always holds: ERROR results are counted in the total but in none of the
/// three named buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleResult {
    pub module_name: String,
    pub file_path: String,
    pub total_links: usize,
    pub passed_links: usize,
    pub failed_links: usize,
    pub skipped_links: usize,

    /// Results in probe order
    pub links: Vec<LinkResult>,

    /// Seconds spent on the whole module
    pub processing_time: f64,
}

impl ModuleResult {
    /// Assembles a module result, deriving every count from `links`
    pub fn from_links(
        module_name: impl Into<String>,
        file_path: impl Into<String>,
        links: Vec<LinkResult>,
        processing_time: f64,
    ) -> Self {
        let count = |status: LinkStatus| links.iter().filter(|l| l.status == status).count();

        Self {
            module_name: module_name.into(),
            file_path: file_path.into(),
            total_links: links.len(),
            passed_links: count(LinkStatus::Pass),
            failed_links: count(LinkStatus::Fail),
            skipped_links: count(LinkStatus::Skip),
            links,
            processing_time,
        }
    }

    /// Number of ERROR results
    pub fn errored_links(&self) -> usize {
        self.total_links - self.passed_links - self.failed_links - self.skipped_links
    }

    pub fn has_failures(&self) -> bool {
        self.failed_links > 0
    }

    /// FAIL results only, in probe order
    pub fn failures(&self) -> impl Iterator<Item = &LinkResult> {
        self.links.iter().filter(|l| l.is_fail())
    }
}
