//! Search query derivation for broken documentation URLs

use crate::config::DocsProfile;

/// Structural hints read from a documentation URL path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlHints {
    /// Version segment, e.g. `4.16`
    pub version: Option<String>,

    /// Segment following `html` or `html-single`, e.g. `monitoring`
    pub topic: Option<String>,

    /// Page slug with dashes turned into spaces
    pub page: Option<String>,
}

impl UrlHints {
    /// Reads the hints out of a URL
    ///
    /// The page is the first segment ending in `.html`, or the first segment
    /// after the topic.
    pub fn from_url(url: &str, version_prefix: &str) -> Self {
        let parts: Vec<&str> = url.split('/').collect();
        let mut hints = Self::default();
        let mut topic_index = None;

        for (i, part) in parts.iter().enumerate() {
            if !version_prefix.is_empty() && part.starts_with(version_prefix) {
                hints.version = Some(part.to_string());
            } else if (*part == "html" || *part == "html-single") && i + 1 < parts.len() {
                hints.topic = Some(parts[i + 1].to_string());
                topic_index = Some(i + 1);
            } else if part.ends_with(".html") || topic_index.is_some_and(|t| i > t) {
                let slug = part.strip_suffix(".html").unwrap_or(part);
                hints.page = Some(slug.replace('-', " "));
                break;
            }
        }

        hints
    }

    pub fn is_empty(&self) -> bool {
        self.version.is_none() && self.topic.is_none() && self.page.is_none()
    }
}

/// Builds a search query for a broken URL, scoped to the documentation host
///
/// Product documentation URLs yield `<product> <version> <topic> <page>`; any
/// other URL (or one without usable hints) falls back to the product name and
/// the last path segment.
///
/// # Example
///
/// ```
/// use doclink_audit::config::DocsProfile;
/// use doclink_audit::replacement::derive_search_query;
///
/// let url = "https://docs.redhat.com/en/documentation/openshift_container_platform/4.16/html/monitoring/configuring-the-monitoring-stack";
/// assert_eq!(
///     derive_search_query(url, &DocsProfile::default()),
///     "OpenShift Container Platform 4.16 monitoring configuring the monitoring stack site:docs.redhat.com"
/// );
/// ```
pub fn derive_search_query(url: &str, docs: &DocsProfile) -> String {
    if url.contains(&docs.product_path) {
        let hints = UrlHints::from_url(url, &docs.version_prefix);
        if !hints.is_empty() {
            let mut terms = vec![docs.product_name.clone()];
            terms.extend(hints.version);
            terms.extend(hints.topic.map(|t| t.replace('-', " ")));
            terms.extend(hints.page);
            terms.push(format!("site:{}", docs.host()));
            return terms.join(" ");
        }
    }

    let last_segment = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .replace('-', " ");

    format!(
        "{} documentation {} site:{}",
        docs.product_name,
        last_segment,
        docs.host()
    )
}
