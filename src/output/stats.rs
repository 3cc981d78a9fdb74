//! Run-level statistics
//!
//! Totals are always derived from the module results, never tracked
//! separately.

use crate::results::ModuleResult;
use serde::Serialize;

/// Totals over every processed module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub modules: usize,
    pub total_links: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn from_modules(modules: &[ModuleResult]) -> Self {
        modules.iter().fold(
            Self {
                modules: modules.len(),
                ..Self::default()
            },
            |acc, m| Self {
                total_links: acc.total_links + m.total_links,
                passed: acc.passed + m.passed_links,
                failed: acc.failed + m.failed_links,
                skipped: acc.skipped + m.skipped_links,
                errored: acc.errored + m.errored_links(),
                ..acc
            },
        )
    }

    /// Passed links as a whole percentage of all links
    ///
    /// SKIP and ERROR results stay in the denominator.
    pub fn success_rate(&self) -> usize {
        if self.total_links == 0 {
            0
        } else {
            self.passed * 100 / self.total_links
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Prints the run totals to stdout
pub fn print_summary(summary: &RunSummary) {
    println!("=== Link Check Summary ===\n");
    println!("  Modules checked: {}", summary.modules);
    println!("  Total links:     {}", summary.total_links);
    println!("  Passed:          {}", summary.passed);
    println!("  Failed:          {}", summary.failed);
    println!("  Skipped:         {}", summary.skipped);
    if summary.errored > 0 {
        println!("  Errors:          {}", summary.errored);
    }
    println!("  Success rate:    {}%", summary.success_rate());
}
