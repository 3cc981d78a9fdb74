use crate::config::DocsProfile;

/// Topic segments used to judge whether two documentation URLs match
pub const TOPIC_VOCABULARY: [&str; 5] = [
    "observability",
    "monitoring",
    "storage",
    "networking",
    "backup_and_restore",
];

/// First path segment of the URL that belongs to the topic vocabulary
///
/// Dashes are read as underscores, so `backup-and-restore` is recognised.
pub fn topic_of(url: &str) -> Option<&'static str> {
    url.split('/').find_map(|part| {
        let normalized = part.replace('-', "_");
        TOPIC_VOCABULARY
            .iter()
            .find(|topic| **topic == normalized)
            .copied()
    })
}

fn topics_related(a: &str, b: &str) -> bool {
    a == b
        || matches!(
            (a, b),
            ("observability", "monitoring") | ("monitoring", "observability")
        )
}

/// Whether a candidate is a plausible replacement for the original URL
///
/// The candidate must live under the documentation base URL, both URLs must
/// sit in the product documentation path, and both must carry related topic
/// segments. A URL without a topic segment never matches.
pub fn is_topic_match(original: &str, candidate: &str, docs: &DocsProfile) -> bool {
    if !candidate.starts_with(docs.base_url.trim_end_matches('/')) {
        return false;
    }
    if !candidate.contains(&docs.product_path) || !original.contains(&docs.product_path) {
        return false;
    }

    match (topic_of(original), topic_of(candidate)) {
        (Some(a), Some(b)) => topics_related(a, b),
        _ => false,
    }
}
