use crate::checker::Prober;
use crate::config::Config;
use crate::CheckerError;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Immutable state shared by every component of one run
///
/// Built once in `main` and handed by reference to the module aggregator, the
/// replacement finder and the collaborators. Nothing in it changes after
/// construction.
#[derive(Debug, Clone)]
pub struct RunContext {
    config: Arc<Config>,
    prober: Prober,
    max_links: Option<usize>,
}

impl RunContext {
    /// Creates the run context
    ///
    /// # Arguments
    ///
    /// * `config` - Validated configuration
    /// * `max_links` - Per-module link limit (test mode), `None` for all links
    pub fn new(config: Config, max_links: Option<usize>) -> Result<Self, CheckerError> {
        let prober = Prober::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            prober,
            max_links,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn prober(&self) -> &Prober {
        &self.prober
    }

    /// HTTP client shared with the search and issue collaborators
    pub fn client(&self) -> &Client {
        self.prober.client()
    }

    pub fn max_links(&self) -> Option<usize> {
        self.max_links
    }

    /// Pause inserted between two network probes
    pub fn delay(&self) -> Duration {
        self.config.settings.delay()
    }
}
