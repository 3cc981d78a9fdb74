//! Integration tests for doclink-audit
//!
//! These tests use wiremock to stand in for every remote service: the
//! documentation hosts being probed, the search endpoint, the chat
//! completion API and the GitHub issues API.

mod collaborator_tests;
mod module_tests;
mod prober_tests;
mod replacement_tests;

use doclink_audit::config::Config;

/// Configuration tuned for tests: no inter-probe delay, short backoff,
/// no skip rules, and the documentation host pointed at `docs_base`
pub fn test_config(docs_base: &str) -> Config {
    let mut config = Config::default();
    config.settings.timeout = 5;
    config.settings.delay_between_checks = 0.0;
    config.retry.backoff_base_ms = 10;
    config.skip = Vec::new();
    config.docs.base_url = docs_base.to_string();
    config.output.log_file = None;
    config
}
