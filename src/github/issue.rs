//! Issue tracker collaborator
//!
//! The run only supplies a title, a body and the fixed label set; the
//! default implementation posts them to the GitHub REST issues endpoint.

use crate::config::{validate_repo_slug, GithubConfig};
use crate::CheckerError;
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Labels attached to every broken-links issue
pub const ISSUE_LABELS: [&str; 4] = ["documentation", "bug", "automated", "link-checker"];

/// Anything that can open an issue
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Opens the issue and returns its web URL
    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[&str],
    ) -> Result<String, CheckerError>;
}

#[derive(Debug, Serialize)]
struct NewIssue<'a> {
    title: &'a str,
    body: &'a str,
    labels: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    html_url: String,
}

/// GitHub REST client for one repository
#[derive(Debug, Clone)]
pub struct GitHubIssues {
    client: Client,
    api_base: String,
    repo: String,
    token: String,
}

impl GitHubIssues {
    /// Creates a client for `owner/name`
    pub fn new(
        client: Client,
        api_base: &str,
        repo: &str,
        token: impl Into<String>,
    ) -> Result<Self, CheckerError> {
        validate_repo_slug(repo)?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
            token: token.into(),
        })
    }

    /// Creates a client with the token read from the configured variable
    ///
    /// # Returns
    ///
    /// * `Ok(GitHubIssues)` - Token found and repository valid
    /// * `Err(CheckerError::MissingCredential)` - The token variable is unset
    pub fn from_env(client: Client, config: &GithubConfig, repo: &str) -> Result<Self, CheckerError> {
        let token = std::env::var(&config.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| CheckerError::MissingCredential(config.token_env.clone()))?;

        Self::new(client, &config.api_base, repo, token)
    }

    fn issues_url(&self) -> String {
        format!("{}/repos/{}/issues", self.api_base, self.repo)
    }
}

#[async_trait]
impl IssueTracker for GitHubIssues {
    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[&str],
    ) -> Result<String, CheckerError> {
        let url = self.issues_url();

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("token {}", self.token))
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .json(&NewIssue {
                title,
                body,
                labels,
            })
            .send()
            .await
            .map_err(|source| CheckerError::Http { url, source })?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            return Err(CheckerError::IssueTracker {
                status: status.as_u16(),
                body,
            });
        }

        let created: CreatedIssue = response.json().await?;
        Ok(created.html_url)
    }
}
