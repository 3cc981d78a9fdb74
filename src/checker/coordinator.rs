//! Run coordinator - sequential processing of all documents
//!
//! This module owns the outer loop of a run:
//! - Discovering the default document set
//! - Checking each document in order through the module aggregator
//! - Omitting unreadable documents without aborting the run

use crate::checker::{check_module, RunContext};
use crate::config::InputConfig;
use crate::results::ModuleResult;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Lists the documents checked when none are given explicitly
///
/// Every `<module-prefix>*<extension>` file in the pages directory, sorted by
/// name, followed by the readme when it exists.
pub fn discover_files(input: &InputConfig) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = match std::fs::read_dir(&input.pages_dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_module_file(path, input))
            .collect(),
        Err(e) => {
            tracing::warn!("Cannot read pages directory {}: {}", input.pages_dir, e);
            Vec::new()
        }
    };
    files.sort();

    let readme = Path::new(&input.readme);
    if readme.is_file() {
        files.push(readme.to_path_buf());
    }

    files
}

fn is_module_file(path: &Path, input: &InputConfig) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with(&input.module_prefix) && name.ends_with(&input.extension))
        .unwrap_or(false)
}

/// Main run coordinator structure
pub struct Coordinator {
    ctx: RunContext,
}

impl Coordinator {
    pub fn new(ctx: RunContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &RunContext {
        &self.ctx
    }

    /// Checks the given documents one after another
    ///
    /// A document that cannot be read is logged and left out of the results;
    /// the remaining documents are still checked.
    pub async fn run(&self, files: &[PathBuf]) -> Vec<ModuleResult> {
        let start = Instant::now();
        let mut modules = Vec::with_capacity(files.len());

        tracing::info!("Checking {} files", files.len());

        for path in files {
            if !path.exists() {
                tracing::error!("File not found: {}", path.display());
                continue;
            }

            match check_module(&self.ctx, path).await {
                Ok(module) => modules.push(module),
                Err(e) => tracing::error!("Error processing {}: {}", path.display(), e),
            }
        }

        tracing::info!(
            "Processed {} of {} files in {:.1}s",
            modules.len(),
            files.len(),
            start.elapsed().as_secs_f64()
        );

        modules
    }
}
