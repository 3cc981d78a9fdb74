//! Configuration module for doclink-audit
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! The configuration is read once at startup and treated as immutable afterwards.
//!
//! # Example
//!
//! ```no_run
//! use doclink_audit::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("link-checker.toml")).unwrap();
//! println!("Probing with a {}s timeout", config.settings.timeout);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    AnalysisConfig, CheckSettings, Config, DocsProfile, GithubConfig, InputConfig, LlmConfig,
    OutputConfig, RetryConfig, SearchConfig, SkipRule,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate_repo_slug;
