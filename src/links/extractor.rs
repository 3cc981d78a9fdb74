//! URL extraction from AsciiDoc source text
//!
//! Two kinds of links are recognised:
//! - explicit macros, `link:https://target[text]`
//! - bare URLs, anything starting with `http://` or `https://` up to the next
//!   whitespace, bracket, angle bracket or parenthesis
//!
//! A bare match that starts where a `link:` target starts is the same link seen
//! twice and is dropped in favour of the macro target.

use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

static LINK_MACRO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"link:(https?://[^\[]+)\[").expect("link macro pattern"));

static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s\[\]<>()]+").expect("bare url pattern"));

/// Extracts every absolute HTTP(S) URL from a document
///
/// The result is deduplicated and sorted, so extracting twice from the same
/// text always yields the same sequence.
///
/// # Example
///
/// ```
/// use doclink_audit::links::extract_links;
///
/// let text = "See link:https://docs.example.com/a[the docs] or https://example.org/b.";
/// let links = extract_links(text);
/// assert_eq!(links, vec!["https://docs.example.com/a", "https://example.org/b."]);
/// ```
pub fn extract_links(content: &str) -> Vec<String> {
    let mut links = BTreeSet::new();
    let mut macro_targets = HashSet::new();

    for captures in LINK_MACRO.captures_iter(content) {
        if let Some(target) = captures.get(1) {
            macro_targets.insert(target.start());
            links.insert(target.as_str().to_string());
        }
    }

    for found in BARE_URL.find_iter(content) {
        if !macro_targets.contains(&found.start()) {
            links.insert(found.as_str().to_string());
        }
    }

    links.into_iter().collect()
}
