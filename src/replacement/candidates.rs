use crate::config::DocsProfile;
use crate::ConfigError;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static TRAILING_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,;)\]]+$").expect("trailing punctuation pattern"));

/// Minimum length of a line kept as the running title
const MIN_TITLE_LEN: usize = 10;

/// Maximum characters kept from a title line
const MAX_TITLE_CHARS: usize = 100;

/// A replacement candidate pulled out of search result text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub url: String,
    pub description: String,
}

/// Line-oriented scanner for documentation URLs in free search text
#[derive(Debug, Clone)]
pub struct CandidateParser {
    host: String,
    keyword: String,
    url_pattern: Regex,
}

impl CandidateParser {
    pub fn new(docs: &DocsProfile) -> Result<Self, ConfigError> {
        let base = docs.base_url.trim_end_matches('/');
        let pattern = format!(r"{}[^\s\]]+", regex::escape(base));
        let url_pattern = Regex::new(&pattern)
            .map_err(|source| ConfigError::InvalidPattern { pattern, source })?;

        Ok(Self {
            host: docs.host().to_string(),
            keyword: docs.product_keyword.to_lowercase(),
            url_pattern,
        })
    }

    /// Extracts candidates in first-seen order, without duplicates
    ///
    /// A line mentioning the documentation host and the product keyword yields
    /// the first documentation URL on it. Any other line longer than ten
    /// characters that does not start with `http` becomes the running title,
    /// which describes the candidates that follow it.
    pub fn parse(&self, text: &str) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        let mut seen = HashSet::new();
        let mut current_title = String::new();

        for line in text.lines().map(str::trim) {
            if line.contains(&self.host) && line.to_lowercase().contains(&self.keyword) {
                if let Some(found) = self.url_pattern.find(line) {
                    let url = TRAILING_PUNCTUATION.replace(found.as_str(), "").into_owned();
                    let description = if current_title.is_empty() {
                        line.to_string()
                    } else {
                        current_title.clone()
                    };

                    if seen.insert(url.clone()) {
                        candidates.push(Candidate { url, description });
                    }
                }
            } else if !line.starts_with("http") && line.chars().count() > MIN_TITLE_LEN {
                current_title = line.chars().take(MAX_TITLE_CHARS).collect();
            }
        }

        candidates
    }
}
