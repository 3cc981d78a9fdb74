//! Failure analysis
//!
//! This module turns the failed links of a run into an `IntelligentAnalysis`:
//! - Value types for replacements and the analysis itself
//! - Prompt construction and the text-generation collaborator
//! - The failure summarizer that scrapes structure out of free text
//! - The analyzer that ties them together

mod analyzer;
mod llm;
mod prompt;
mod summarizer;
mod types;

pub use analyzer::{collect_failed_links, issue_title, Analyzer, NO_ANALYSIS};
pub use llm::{ChatCompletionsClient, TextGenerator};
pub use prompt::{build_prompt, SYSTEM_PREAMBLE};
pub use summarizer::{
    extract_impact_assessment, extract_recommendations, summarize, Summary, MAX_IMPACT_LINES,
    MAX_RECOMMENDATIONS,
};
pub use types::{Confidence, FailedLink, IntelligentAnalysis, ValidatedReplacement};
