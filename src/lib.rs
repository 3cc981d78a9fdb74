//! doclink-audit: documentation link validation with replacement discovery
//!
//! This crate checks every hyperlink found in a set of documentation source
//! files, classifies each one as PASS, FAIL, SKIP or ERROR, and produces a
//! remediation report. For broken links it can search for working
//! replacements and ask a text-generation service for an analysis.

pub mod analysis;
pub mod checker;
pub mod config;
pub mod github;
pub mod links;
pub mod output;
pub mod replacement;
pub mod results;

use thiserror::Error;

/// Main error type for doclink-audit operations
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Search failed: {0}")]
    Search(String),

    #[error("Text generation failed: {0}")]
    TextGeneration(String),

    #[error("Issue tracker returned HTTP {status}: {body}")]
    IssueTracker { status: u16, body: String },

    #[error("Missing credential: environment variable {0} is not set")]
    MissingCredential(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid skip pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Result type alias for doclink-audit operations
pub type Result<T> = std::result::Result<T, CheckerError>;

// Re-export commonly used types
pub use analysis::{IntelligentAnalysis, ValidatedReplacement};
pub use checker::{Coordinator, Prober, RunContext};
pub use config::Config;
pub use links::{extract_links, SkipFilter};
pub use results::{LinkResult, LinkStatus, ModuleResult};
