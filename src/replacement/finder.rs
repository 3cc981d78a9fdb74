//! Replacement finder - search-and-validate loop for one broken URL
//!
//! The finder derives a query from the broken URL, asks the search provider,
//! scans the returned text for documentation candidates and re-probes the
//! topic-matching ones until one passes.

use crate::analysis::{Confidence, ValidatedReplacement};
use crate::checker::{Prober, RunContext};
use crate::config::DocsProfile;
use crate::replacement::{derive_search_query, is_topic_match, CandidateParser, SearchProvider};
use crate::results::LinkStatus;
use crate::CheckerError;

/// Tag recorded on every replacement confirmed by search and re-probe
pub const VALIDATION_METHOD: &str = "web_search_and_test";

pub struct ReplacementFinder<'a> {
    prober: &'a Prober,
    docs: &'a DocsProfile,
    search: &'a dyn SearchProvider,
    parser: CandidateParser,
    max_candidates: usize,
}

impl<'a> ReplacementFinder<'a> {
    /// Creates a finder bound to the run context and a search provider
    pub fn new(ctx: &'a RunContext, search: &'a dyn SearchProvider) -> Result<Self, CheckerError> {
        let config = ctx.config();
        Ok(Self {
            prober: ctx.prober(),
            docs: &config.docs,
            search,
            parser: CandidateParser::new(&config.docs)?,
            max_candidates: config.analysis.max_candidates,
        })
    }

    /// Looks for a working replacement for one broken URL
    ///
    /// Returns `None` when no candidate both matches the topic and passes a
    /// re-probe. Search failures are logged and also yield `None`.
    pub async fn find(&self, broken_url: &str) -> Option<ValidatedReplacement> {
        let query = derive_search_query(broken_url, self.docs);
        tracing::info!("Searching for: {}", query);

        let text = match self.search.search(&query).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Search for replacement failed: {}", e);
                return None;
            }
        };

        if text.trim().is_empty() {
            return None;
        }

        let candidates = self.parser.parse(&text);
        tracing::debug!("{} candidates for {}", candidates.len(), broken_url);

        for candidate in candidates.into_iter().take(self.max_candidates) {
            if !is_topic_match(broken_url, &candidate.url, self.docs) {
                tracing::debug!("Candidate off topic: {}", candidate.url);
                continue;
            }

            tracing::info!("Testing candidate: {}", candidate.url);
            let result = self.prober.check(&candidate.url).await;

            if result.status == LinkStatus::Pass {
                return Some(ValidatedReplacement {
                    original_url: broken_url.to_string(),
                    replacement_url: candidate.url,
                    confidence: Confidence::High,
                    validation_method: VALIDATION_METHOD.to_string(),
                    description: candidate.description,
                });
            }

            tracing::info!(
                "Candidate failed: {} - {}",
                candidate.url,
                result.error_message.as_deref().unwrap_or(result.status.as_str())
            );
        }

        None
    }

    /// Runs `find` for every URL, keeping the ones that produced a replacement
    pub async fn find_all<'u>(
        &self,
        broken_urls: impl IntoIterator<Item = &'u str>,
    ) -> Vec<ValidatedReplacement> {
        let mut found = Vec::new();
        for url in broken_urls {
            match self.find(url).await {
                Some(replacement) => {
                    tracing::info!("Found replacement: {}", replacement.replacement_url);
                    found.push(replacement);
                }
                None => tracing::info!("No replacement found for: {}", url),
            }
        }
        found
    }
}
