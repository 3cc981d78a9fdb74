//! HTTP prober implementation
//!
//! This module performs the single reachability check behind every link
//! result, including:
//! - Building the shared HTTP client with the configured user agent
//! - Skip-rule short-circuit (no network call for skipped URLs)
//! - Transparent retry with exponential backoff on transient statuses
//! - Status and transport-error classification

use crate::config::{CheckSettings, Config, RetryConfig};
use crate::links::SkipFilter;
use crate::results::{LinkResult, LinkStatus};
use crate::CheckerError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{redirect::Policy, Client, Response};
use std::time::{Duration, Instant};
use tokio_retry::RetryIf;
use url::Url;

/// Status codes classified as PASS
pub const ACCEPTED_STATUS_CODES: [u16; 14] = [
    200, 201, 202, 203, 204, 205, 206, 300, 301, 302, 303, 304, 307, 308,
];

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `settings` - Timeout, redirect limit and user agent
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use doclink_audit::config::CheckSettings;
/// use doclink_audit::checker::build_http_client;
///
/// let client = build_http_client(&CheckSettings::default()).unwrap();
/// ```
pub fn build_http_client(settings: &CheckSettings) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

    Client::builder()
        .user_agent(settings.user_agent.clone())
        .default_headers(headers)
        .timeout(settings.timeout())
        .redirect(Policy::limited(settings.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Delays between attempts: `base`, `2 * base`, `4 * base`, ...
fn backoff_schedule(retry: &RetryConfig) -> impl Iterator<Item = Duration> {
    let base = retry.backoff_base_ms;
    (0..retry.max_retries).map(move |attempt| {
        let factor = 2u64.saturating_pow(u32::try_from(attempt).unwrap_or(u32::MAX));
        Duration::from_millis(base.saturating_mul(factor))
    })
}

/// Outcome of one attempt inside the retry loop
enum Attempt {
    /// The server answered with a status from the retry force-list
    Retryable(Response),

    /// No response at all; never retried
    Transport(reqwest::Error),
}

/// Reachability checker for single URLs
///
/// A prober owns the HTTP client and the compiled skip rules for one run. It
/// never returns an error: every outcome is expressed as a `LinkResult`.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
    skip: SkipFilter,
    retry: RetryConfig,
}

impl Prober {
    /// Creates a prober from the run configuration
    pub fn new(config: &Config) -> Result<Self, CheckerError> {
        let client = build_http_client(&config.settings)?;
        let skip = SkipFilter::new(&config.skip)?;
        Ok(Self::with_client(client, skip, config.retry.clone()))
    }

    /// Creates a prober around an existing client
    pub fn with_client(client: Client, skip: SkipFilter, retry: RetryConfig) -> Self {
        Self {
            client,
            skip,
            retry,
        }
    }

    /// The shared HTTP client, reused by the search and issue collaborators
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Reason for skipping the URL, if a skip rule matches
    pub fn skip_reason(&self, url: &str) -> Option<&str> {
        self.skip.should_skip(url)
    }

    /// Checks one URL: skip rules first, then the network probe
    ///
    /// A URL matched by a skip rule yields SKIP with the rule's reason and no
    /// request is sent.
    pub async fn check(&self, url: &str) -> LinkResult {
        let start = Instant::now();

        if let Some(reason) = self.skip.should_skip(url) {
            return LinkResult::skipped(url, reason, start.elapsed().as_secs_f64());
        }

        self.probe(url).await
    }

    /// Issues a GET for the URL and classifies the outcome
    ///
    /// # Classification
    ///
    /// | Outcome | Status | Message |
    /// |---------|--------|---------|
    /// | 200-206, 300-304, 307, 308 | PASS | - |
    /// | any other status | FAIL | `HTTP <code>` |
    /// | timeout | FAIL | `Request timeout` |
    /// | DNS, refused, TLS, reset | FAIL | `Connection error` |
    /// | anything else | ERROR | error text |
    pub async fn probe(&self, url: &str) -> LinkResult {
        let start = Instant::now();
        let outcome = self.get_with_retry(url).await;
        let elapsed = start.elapsed().as_secs_f64();

        match outcome {
            Ok(response) => classify_response(url, &response, elapsed),
            Err(error) => classify_error(url, &error, elapsed),
        }
    }

    /// Sends the GET, retrying force-listed statuses with exponential backoff
    ///
    /// After the last retry the final response is returned as-is so the
    /// caller classifies it like any other.
    async fn get_with_retry(&self, url: &str) -> Result<Response, reqwest::Error> {
        let client = &self.client;
        let forcelist = self.retry.status_forcelist.as_slice();

        let action = move || async move {
            let response = client.get(url).send().await.map_err(Attempt::Transport)?;
            let code = response.status().as_u16();
            if forcelist.contains(&code) {
                tracing::debug!("HTTP {} from {}, eligible for retry", code, url);
                return Err(Attempt::Retryable(response));
            }
            Ok(response)
        };

        let outcome = RetryIf::start(backoff_schedule(&self.retry), action, |attempt: &Attempt| {
            matches!(attempt, Attempt::Retryable(_))
        })
        .await;

        match outcome {
            Ok(response) | Err(Attempt::Retryable(response)) => Ok(response),
            Err(Attempt::Transport(error)) => Err(error),
        }
    }
}

/// Maps a received response to PASS or FAIL
fn classify_response(url: &str, response: &Response, elapsed: f64) -> LinkResult {
    let code = response.status().as_u16();

    let (status, error_message) = if ACCEPTED_STATUS_CODES.contains(&code) {
        (LinkStatus::Pass, None)
    } else {
        (LinkStatus::Fail, Some(format!("HTTP {}", code)))
    };

    LinkResult {
        url: url.to_string(),
        status_code: Some(code),
        status,
        response_time: elapsed,
        error_message,
        final_url: redirected_url(url, response.url()),
    }
}

/// The resolved URL, only when it differs from the requested one
///
/// Both sides are compared in parsed form so that normalisation alone (an added
/// trailing slash on a bare host) is not reported as a redirect.
fn redirected_url(requested: &str, resolved: &Url) -> Option<String> {
    match Url::parse(requested) {
        Ok(parsed) if &parsed == resolved => None,
        _ => Some(resolved.to_string()),
    }
}

/// Maps a transport failure to FAIL or ERROR
fn classify_error(url: &str, error: &reqwest::Error, elapsed: f64) -> LinkResult {
    if error.is_timeout() {
        LinkResult::without_response(url, LinkStatus::Fail, "Request timeout", elapsed)
    } else if is_connection_failure(error) {
        LinkResult::without_response(url, LinkStatus::Fail, "Connection error", elapsed)
    } else {
        LinkResult::without_response(url, LinkStatus::Error, error.to_string(), elapsed)
    }
}

/// Connect failures plus connections dropped at the socket level
fn is_connection_failure(error: &reqwest::Error) -> bool {
    if error.is_connect() {
        return true;
    }

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        if cause.is::<std::io::Error>() {
            return true;
        }
        source = cause.source();
    }
    false
}
