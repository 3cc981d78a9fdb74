//! Module aggregator
//!
//! Drives extraction, skip filtering and probing over one document and folds
//! the outcomes into a `ModuleResult`.

use crate::checker::RunContext;
use crate::config::InputConfig;
use crate::links::extract_links;
use crate::results::{LinkResult, LinkStatus, ModuleResult};
use crate::CheckerError;
use std::path::Path;
use std::time::Instant;

/// Derives the human-readable module name from a file path
///
/// - `module-<N>-<slug><ext>` becomes `Module <N>: <Slug In Title Case>`
/// - the configured readme becomes `README Documentation`
/// - anything else is the file stem, title-cased
///
/// # Example
///
/// ```
/// use doclink_audit::checker::module_name;
/// use doclink_audit::config::InputConfig;
/// use std::path::Path;
///
/// let input = InputConfig::default();
/// assert_eq!(
///     module_name(Path::new("pages/module-02-cluster-monitoring.adoc"), &input),
///     "Module 02: Cluster Monitoring"
/// );
/// ```
pub fn module_name(path: &Path, input: &InputConfig) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some((number, slug)) = numbered_module(&file_name, input) {
        return format!("Module {}: {}", number, title_case(&slug.replace('-', " ")));
    }

    let readme_name = Path::new(&input.readme).file_name();
    if readme_name.is_some_and(|readme| readme == file_name.as_str()) {
        return "README Documentation".to_string();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    title_case(&stem)
}

/// Splits `module-<digits>-<slug><ext>` into its number and slug
fn numbered_module<'a>(file_name: &'a str, input: &InputConfig) -> Option<(&'a str, &'a str)> {
    let rest = file_name
        .strip_prefix(input.module_prefix.as_str())?
        .strip_suffix(input.extension.as_str())?;
    let (number, slug) = rest.split_once('-')?;

    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) || slug.is_empty() {
        return None;
    }
    Some((number, slug))
}

/// Upper-cases the first letter of every alphabetic run, lower-cases the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut previous_alpha = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if previous_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_alpha = true;
        } else {
            out.push(c);
            previous_alpha = false;
        }
    }
    out
}

/// Checks every link in one document
///
/// Links are probed strictly one after another with the configured delay
/// between two network probes. Skipped links cost no request and no delay.
///
/// # Returns
///
/// * `Ok(ModuleResult)` - The document was read and all its links checked
/// * `Err(CheckerError::Io)` - The document could not be read
pub async fn check_module(ctx: &RunContext, path: &Path) -> Result<ModuleResult, CheckerError> {
    let start = Instant::now();
    let name = module_name(path, &ctx.config().input);
    let file_path = path.display().to_string();

    tracing::info!("Processing {}", name);
    tracing::info!("File: {}", file_path);

    let content = tokio::fs::read_to_string(path).await?;
    let mut links = extract_links(&content);

    if links.is_empty() {
        tracing::info!("No links found in {}", name);
        return Ok(ModuleResult::from_links(
            name,
            file_path,
            Vec::new(),
            start.elapsed().as_secs_f64(),
        ));
    }

    match ctx.max_links() {
        Some(limit) if limit < links.len() => {
            links.truncate(limit);
            tracing::info!("Testing first {} links (limited for testing)", links.len());
        }
        _ => tracing::info!("Found {} links to validate", links.len()),
    }

    let prober = ctx.prober();
    let total = links.len();
    let mut results = Vec::with_capacity(total);
    let mut probed = false;

    for (index, url) in links.iter().enumerate() {
        tracing::info!("[{}/{}] Checking: {}", index + 1, total, url);

        let result = match prober.skip_reason(url) {
            Some(reason) => LinkResult::skipped(url.as_str(), reason, 0.0),
            None => {
                if probed {
                    tokio::time::sleep(ctx.delay()).await;
                }
                probed = true;
                prober.probe(url).await
            }
        };

        log_result(&result);
        results.push(result);
    }

    let module = ModuleResult::from_links(name, file_path, results, start.elapsed().as_secs_f64());

    if module.has_failures() {
        tracing::error!(
            "{}: {} LINKS FAILED ({} passed, {} skipped)",
            module.module_name,
            module.failed_links,
            module.passed_links,
            module.skipped_links
        );
    } else {
        tracing::info!(
            "{}: ALL LINKS WORKING ({} passed, {} skipped)",
            module.module_name,
            module.passed_links,
            module.skipped_links
        );
    }

    Ok(module)
}

fn log_result(result: &LinkResult) {
    let message = result.error_message.as_deref().unwrap_or_default();
    match result.status {
        LinkStatus::Pass => {
            tracing::info!("PASS: {} ({:.2}s)", result.url, result.response_time)
        }
        LinkStatus::Skip => tracing::info!("SKIP: {} - {}", result.url, message),
        LinkStatus::Fail => tracing::error!("FAIL: {} - {}", result.url, message),
        LinkStatus::Error => tracing::error!("ERROR: {} - {}", result.url, message),
    }
}
