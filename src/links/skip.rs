use crate::config::SkipRule;
use crate::ConfigError;
use regex::Regex;

/// Reason reported when a rule has none of its own
pub const DEFAULT_SKIP_REASON: &str = "configured to skip";

/// Compiled skip rules
///
/// Rules are tried in configuration order and the first pattern found anywhere
/// in the URL wins. Skipped URLs are reported as SKIP and never probed.
#[derive(Debug, Clone, Default)]
pub struct SkipFilter {
    rules: Vec<(Regex, String)>,
}

impl SkipFilter {
    /// Compiles the configured rules
    ///
    /// # Returns
    ///
    /// * `Ok(SkipFilter)` - All patterns compiled
    /// * `Err(ConfigError::InvalidPattern)` - The first pattern that failed
    pub fn new(rules: &[SkipRule]) -> Result<Self, ConfigError> {
        let compiled = rules
            .iter()
            .map(|rule| {
                let regex = Regex::new(&rule.pattern).map_err(|source| {
                    ConfigError::InvalidPattern {
                        pattern: rule.pattern.clone(),
                        source,
                    }
                })?;
                let reason = rule
                    .reason
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SKIP_REASON.to_string());
                Ok((regex, reason))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self { rules: compiled })
    }

    /// Returns the skip reason if any rule matches the URL
    ///
    /// # Examples
    ///
    /// ```
    /// use doclink_audit::config::SkipRule;
    /// use doclink_audit::links::SkipFilter;
    ///
    /// let filter = SkipFilter::new(&[SkipRule {
    ///     pattern: r"example\.com/private".to_string(),
    ///     reason: Some("requires login".to_string()),
    /// }])
    /// .unwrap();
    ///
    /// assert_eq!(filter.should_skip("https://example.com/private/page"), Some("requires login"));
    /// assert_eq!(filter.should_skip("https://example.com/public"), None);
    /// ```
    pub fn should_skip(&self, url: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(regex, _)| regex.is_match(url))
            .map(|(_, reason)| reason.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
