use crate::analysis::{FailedLink, ValidatedReplacement};
use crate::CheckerError;

/// System message sent ahead of every analysis prompt
pub const SYSTEM_PREAMBLE: &str = "\
You are an expert technical documentation analyst specializing in product documentation.
Your role is to analyze broken documentation links and provide actionable insights.

Focus on:
1. Identifying patterns in broken links (version mismatches, URL structure changes, etc.)
2. Assessing the impact on workshop participants
3. Providing specific, actionable recommendations for fixes
4. Suggesting alternative documentation sources when appropriate

Be concise, technical, and practical in your analysis.";

/// Builds the user prompt for the text-generation service
///
/// Failed links and validated replacements are embedded as pretty JSON so the
/// model sees every field.
pub fn build_prompt(
    workshop_context: &str,
    total_modules: usize,
    failed_links: &[FailedLink],
    replacements: &[ValidatedReplacement],
) -> Result<String, CheckerError> {
    let failed_json = serde_json::to_string_pretty(failed_links)?;

    let replacements_section = if replacements.is_empty() {
        String::new()
    } else {
        format!(
            "\nValidated Replacement URLs Found:\n{}\n",
            serde_json::to_string_pretty(replacements)?
        )
    };

    Ok(format!(
        "Analyze the following broken documentation links from the workshop.

Workshop Context: {workshop_context}
Total Modules Affected: {total_modules}
Total Failed Links: {total_failed}

Failed Links:
{failed_json}
{replacements_section}
Please provide:
1. Pattern Analysis: What patterns do you see in the broken links?
2. Impact Assessment: How do these broken links affect workshop participants?
3. Specific Recommendations: What should be done to fix each category of broken links?
4. Validated Replacements: For each broken link, recommend the validated replacement URL if found, or suggest search strategies if not found.

Format your response as structured analysis with clear sections.
Focus on the validated replacement URLs that have been tested and confirmed to work.",
        total_failed = failed_links.len(),
    ))
}
