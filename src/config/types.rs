use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for doclink-audit
///
/// Every section is optional; a missing section takes the defaults the
/// checker ships with.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub settings: CheckSettings,
    pub retry: RetryConfig,
    pub skip: Vec<SkipRule>,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub docs: DocsProfile,
    pub analysis: AnalysisConfig,
    pub github: GithubConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: CheckSettings::default(),
            retry: RetryConfig::default(),
            skip: default_skip_rules(),
            input: InputConfig::default(),
            output: OutputConfig::default(),
            docs: DocsProfile::default(),
            analysis: AnalysisConfig::default(),
            github: GithubConfig::default(),
        }
    }
}

/// Probe behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CheckSettings {
    /// Per-request timeout in seconds
    pub timeout: u64,

    /// Maximum number of redirects followed per request
    pub max_redirects: usize,

    /// Pause between two consecutive probes of one module (seconds)
    pub delay_between_checks: f64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl CheckSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay_between_checks).unwrap_or_default()
    }
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            timeout: 30,
            max_redirects: 5,
            delay_between_checks: 1.0,
            user_agent: "Mozilla/5.0 (compatible; OpenShift-Workshop-LinkChecker/1.0)".to_string(),
        }
    }
}

/// Transport-level retry configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RetryConfig {
    /// Extra attempts after the first request
    pub max_retries: usize,

    /// Delay before the first retry (milliseconds); doubles on each retry
    pub backoff_base_ms: u64,

    /// Status codes that trigger a retry
    pub status_forcelist: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_base_ms: 1000,
            status_forcelist: vec![429, 500, 502, 503, 504],
        }
    }
}

/// A URL pattern exempt from probing
#[derive(Debug, Clone, Deserialize)]
pub struct SkipRule {
    /// Regular expression searched for anywhere in the URL
    pub pattern: String,

    /// Reported reason; defaults to "configured to skip"
    #[serde(default)]
    pub reason: Option<String>,
}

fn default_skip_rules() -> Vec<SkipRule> {
    vec![SkipRule {
        pattern: r"console\.redhat\.com.*openshift.*assisted-installer.*clusters$".to_string(),
        reason: Some("requires authentication".to_string()),
    }]
}

/// Where to look for documents when no files are given on the command line
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InputConfig {
    pub pages_dir: String,
    pub module_prefix: String,
    pub extension: String,
    pub readme: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            pages_dir: "content/modules/ROOT/pages".to_string(),
            module_prefix: "module-".to_string(),
            extension: ".adoc".to_string(),
            readme: "README.adoc".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Log file mirrored from the console output
    pub log_file: Option<String>,

    /// Path to the markdown report
    pub report_file: String,

    /// Optional path to the JSON report
    pub json_file: Option<String>,

    /// Heading of the markdown report
    pub report_title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            log_file: Some("link-check.log".to_string()),
            report_file: "issue.md".to_string(),
            json_file: None,
            report_title: "Documentation Link Validation Report".to_string(),
        }
    }
}

/// The documentation site replacements are searched on
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DocsProfile {
    /// Scheme and host every replacement must start with
    pub base_url: String,

    /// Path segment identifying the product documentation
    pub product_path: String,

    /// Keyword a search result line must mention
    pub product_keyword: String,

    /// Human product name used in search queries
    pub product_name: String,

    /// Prefix of the version path segment
    pub version_prefix: String,
}

impl DocsProfile {
    /// Host part of `base_url`, used for `site:` scoping
    pub fn host(&self) -> &str {
        let without_scheme = self
            .base_url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.base_url);
        without_scheme.split('/').next().unwrap_or(without_scheme)
    }
}

impl Default for DocsProfile {
    fn default() -> Self {
        Self {
            base_url: "https://docs.redhat.com".to_string(),
            product_path: "openshift_container_platform".to_string(),
            product_keyword: "openshift".to_string(),
            product_name: "OpenShift Container Platform".to_string(),
            version_prefix: "4.".to_string(),
        }
    }
}

/// Failure analysis configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AnalysisConfig {
    pub enabled: bool,

    /// Context line handed to the text-generation service
    pub workshop_context: String,

    /// How many search candidates are examined per broken link
    pub max_candidates: usize,

    pub search: SearchConfig,
    pub llm: LlmConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            workshop_context: "OpenShift 4.18/4.19 Bare Metal Deployment Workshop".to_string(),
            max_candidates: 5,
            search: SearchConfig::default(),
            llm: LlmConfig::default(),
        }
    }
}

/// Web search collaborator configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://html.duckduckgo.com/html/".to_string(),
            max_results: 5,
        }
    }
}

/// OpenAI-compatible chat completion configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LlmConfig {
    pub api_base: String,
    pub model: String,

    /// Environment variable holding the API key
    pub api_key_env: String,

    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub presence_penalty: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base: "https://granite-3-3-8b-instruct-maas-apicast-production.apps.prod.rhoai.rh-aiservices-bu.com:443/v1".to_string(),
            model: "granite-3-3-8b-instruct".to_string(),
            api_key_env: "MASS_API".to_string(),
            temperature: 0.01,
            max_tokens: 1024,
            top_p: 0.9,
            presence_penalty: 0.5,
        }
    }
}

/// Issue tracker configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GithubConfig {
    /// Repository in `owner/name` form
    pub repo: Option<String>,

    /// Environment variable holding the token
    pub token_env: String,

    pub api_base: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            repo: None,
            token_env: "GITHUB_TOKEN".to_string(),
            api_base: "https://api.github.com".to_string(),
        }
    }
}
