use serde::{Deserialize, Serialize};
use std::fmt;

/// How sure the finder is about a replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A discovered, topic-matched and re-probed substitute for a broken URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedReplacement {
    pub original_url: String,
    pub replacement_url: String,
    pub confidence: Confidence,

    /// Tag naming how the replacement was confirmed
    pub validation_method: String,

    pub description: String,
}

/// A FAIL result together with the module it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedLink {
    pub module: String,
    pub url: String,
    pub error: Option<String>,
    pub status_code: Option<u16>,
}

/// Run-level failure analysis
///
/// Built once per run, and only when at least one link failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelligentAnalysis {
    pub broken_links: Vec<String>,

    /// Free text from the text-generation service
    pub analysis: String,

    /// At most five entries
    pub recommendations: Vec<String>,

    pub impact_assessment: String,
    pub github_issue_title: String,
    pub github_issue_body: String,
    pub validated_replacements: Vec<ValidatedReplacement>,
}
