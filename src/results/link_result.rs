/// Link status definitions and the per-URL probe result
///
/// A `LinkResult` is produced once by the prober and never mutated.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal classification of one URL probe attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LinkStatus {
    /// The URL answered with an accepted status code
    Pass,

    /// Understood negative outcome: bad status, timeout, connection failure
    Fail,

    /// Exempt from probing by a skip rule
    Skip,

    /// Unexpected fault that could not be classified
    Error,
}

impl LinkStatus {
    /// Returns the upper-case label used in logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Skip => "SKIP",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of checking a single URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkResult {
    /// The URL as it was extracted from the document
    pub url: String,

    /// Final HTTP status code, when a response was received
    pub status_code: Option<u16>,

    pub status: LinkStatus,

    /// Wall time spent on the check, in seconds
    pub response_time: f64,

    /// Failure description or skip reason
    pub error_message: Option<String>,

    /// Resolved URL after redirects, only when it differs from `url`
    pub final_url: Option<String>,
}

impl LinkResult {
    /// A result for a URL exempted by a skip rule
    pub fn skipped(url: impl Into<String>, reason: impl Into<String>, elapsed: f64) -> Self {
        Self {
            url: url.into(),
            status_code: None,
            status: LinkStatus::Skip,
            response_time: elapsed,
            error_message: Some(reason.into()),
            final_url: None,
        }
    }

    /// A result for a request that never produced a response
    pub fn without_response(
        url: impl Into<String>,
        status: LinkStatus,
        message: impl Into<String>,
        elapsed: f64,
    ) -> Self {
        Self {
            url: url.into(),
            status_code: None,
            status,
            response_time: elapsed,
            error_message: Some(message.into()),
            final_url: None,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.status == LinkStatus::Pass
    }

    pub fn is_fail(&self) -> bool {
        self.status == LinkStatus::Fail
    }
}
