use crate::config::types::{CheckSettings, Config, DocsProfile, GithubConfig, RetryConfig, SkipRule};
use crate::ConfigError;
use regex::Regex;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_settings(&config.settings)?;
    validate_retry(&config.retry)?;
    validate_skip_rules(&config.skip)?;
    validate_docs_profile(&config.docs)?;
    validate_github(&config.github)?;

    if config.output.report_file.is_empty() {
        return Err(ConfigError::Validation(
            "report_file cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_settings(settings: &CheckSettings) -> Result<(), ConfigError> {
    if settings.timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout must be >= 1s, got {}s",
            settings.timeout
        )));
    }

    if settings.max_redirects > 30 {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be <= 30, got {}",
            settings.max_redirects
        )));
    }

    if !settings.delay_between_checks.is_finite() || settings.delay_between_checks < 0.0 {
        return Err(ConfigError::Validation(format!(
            "delay_between_checks must be a non-negative number of seconds, got {}",
            settings.delay_between_checks
        )));
    }

    if settings.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_retry(retry: &RetryConfig) -> Result<(), ConfigError> {
    if retry.max_retries > 10 {
        return Err(ConfigError::Validation(format!(
            "max_retries must be <= 10, got {}",
            retry.max_retries
        )));
    }

    if let Some(code) = retry
        .status_forcelist
        .iter()
        .find(|code| !(100..=599).contains(*code))
    {
        return Err(ConfigError::Validation(format!(
            "status_forcelist contains an invalid HTTP status: {}",
            code
        )));
    }

    Ok(())
}

/// Every skip pattern must compile
fn validate_skip_rules(rules: &[SkipRule]) -> Result<(), ConfigError> {
    for rule in rules {
        Regex::new(&rule.pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: rule.pattern.clone(),
            source,
        })?;
    }
    Ok(())
}

fn validate_docs_profile(docs: &DocsProfile) -> Result<(), ConfigError> {
    let url = Url::parse(&docs.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid docs base_url: {}", e)))?;

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "docs base_url '{}' has no host",
            docs.base_url
        )));
    }

    if docs.product_path.is_empty() || docs.product_keyword.is_empty() {
        return Err(ConfigError::Validation(
            "docs product_path and product_keyword cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_github(github: &GithubConfig) -> Result<(), ConfigError> {
    if let Some(repo) = &github.repo {
        validate_repo_slug(repo)?;
    }

    Url::parse(&github.api_base)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid github api_base: {}", e)))?;

    Ok(())
}

/// Validates an `owner/name` repository slug
pub fn validate_repo_slug(repo: &str) -> Result<(), ConfigError> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(())
        }
        _ => Err(ConfigError::Validation(format!(
            "github repo must be in 'owner/name' form, got '{}'",
            repo
        ))),
    }
}
