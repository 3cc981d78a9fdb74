//! Replacement discovery for broken documentation links
//!
//! This module contains:
//! - Search query derivation from broken URLs
//! - Candidate extraction from free search text
//! - The topic-match heuristic
//! - The search collaborator and its DuckDuckGo implementation
//! - The finder that ties them together with a re-probe

mod candidates;
mod finder;
mod query;
mod search;
mod topic;

pub use candidates::{Candidate, CandidateParser};
pub use finder::{ReplacementFinder, VALIDATION_METHOD};
pub use query::{derive_search_query, UrlHints};
pub use search::{parse_result_page, render_hits, DuckDuckGoSearch, SearchHit, SearchProvider};
pub use topic::{is_topic_match, topic_of, TOPIC_VOCABULARY};
