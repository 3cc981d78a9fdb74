//! Failure summarizer
//!
//! Best-effort scraping of structure out of free analysis text. Missing
//! markers give an empty list or an empty string, never an error.

/// Upper bound on extracted recommendations
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Upper bound on lines joined into the impact statement
pub const MAX_IMPACT_LINES: usize = 3;

/// Structure extracted from analysis text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub recommendations: Vec<String>,
    pub impact_assessment: String,
}

/// Extracts both recommendations and the impact statement
pub fn summarize(text: &str) -> Summary {
    Summary {
        recommendations: extract_recommendations(text),
        impact_assessment: extract_impact_assessment(text),
    }
}

/// Strips a `- `, `* ` or `<digits>. ` marker, or returns None for non-items
fn list_item(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Some(rest);
    }

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

/// List items following the first line that mentions a recommendation or fix
///
/// Blank lines inside the list are skipped; any other non-item line ends it.
///
/// # Example
///
/// ```
/// use doclink_audit::analysis::extract_recommendations;
///
/// let text = "## Recommendations\n- Update the version\n\n2. Remove dead links\nThanks";
/// assert_eq!(
///     extract_recommendations(text),
///     vec!["Update the version", "Remove dead links"]
/// );
/// ```
pub fn extract_recommendations(text: &str) -> Vec<String> {
    let mut lines = text.lines().map(str::trim);

    let started = lines.by_ref().any(|line| {
        let lower = line.to_lowercase();
        lower.contains("recommendation") || lower.contains("fix")
    });
    if !started {
        return Vec::new();
    }

    let mut recommendations = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        match list_item(line) {
            Some(item) => recommendations.push(item.trim().to_string()),
            None => break,
        }
        if recommendations.len() == MAX_RECOMMENDATIONS {
            break;
        }
    }

    recommendations
}

/// Lines following the first line that mentions impact, up to a blank line
///
/// Headings are left out and at most three lines are joined with spaces.
pub fn extract_impact_assessment(text: &str) -> String {
    let mut lines = text.lines().map(str::trim);

    if !lines.by_ref().any(|line| line.to_lowercase().contains("impact")) {
        return String::new();
    }

    let mut collected: Vec<&str> = Vec::new();
    for line in lines {
        if line.is_empty() {
            if collected.is_empty() {
                continue;
            }
            break;
        }
        if !line.starts_with('#') {
            collected.push(line);
        }
    }

    collected.truncate(MAX_IMPACT_LINES);
    collected.join(" ")
}
