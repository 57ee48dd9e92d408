//! Proxy resolution: fetch, filter, probe and fall back once

use crate::error::ProxyError;
use crate::proxy::checker::{LivenessChecker, ProxyChecker};
use crate::proxy::config::FreeProxyConfig;
use crate::proxy::crawler::{ListFetcher, ProxyCrawler};
use crate::proxy::filter::filter_rows;
use crate::proxy::source::select_source;
use crate::Result;
use log::{debug, info, warn};
use rand::seq::SliceRandom;

/// Finds a working free proxy matching a configuration.
///
/// Generic over the row source and the liveness probe so either can be
/// replaced; `FreeProxy::new` wires in the HTTP-backed defaults.
pub struct FreeProxy<F = ProxyCrawler, C = ProxyChecker> {
    config: FreeProxyConfig,
    fetcher: F,
    checker: C,
}

impl FreeProxy {
    /// Create a resolver backed by the default crawler and checker
    pub fn new(config: FreeProxyConfig) -> Result<Self> {
        Ok(Self::with_parts(config, ProxyCrawler::new()?, ProxyChecker::new()))
    }
}

impl<F: ListFetcher, C: LivenessChecker> FreeProxy<F, C> {
    /// Create a resolver from explicit parts
    pub fn with_parts(config: FreeProxyConfig, fetcher: F, checker: C) -> Self {
        Self {
            config: config.resolved(),
            fetcher,
            checker,
        }
    }

    /// Effective configuration, defaults applied
    pub fn config(&self) -> &FreeProxyConfig {
        &self.config
    }

    /// Fetch one listing page and return the addresses passing the filter
    pub async fn get_proxy_list(&self, repeat: bool) -> Result<Vec<String>> {
        self.candidates(&self.config, repeat).await
    }

    /// Return the URL of the first working proxy.
    ///
    /// When the first pass finds nothing, a second pass runs against the
    /// general listing with country targeting removed.
    pub async fn get(&self) -> Result<String> {
        let relaxed = self.config.without_countries();
        let passes = [(&self.config, false), (&relaxed, true)];

        for (config, repeat) in passes {
            if let Some(url) = self.resolve_pass(config, repeat).await? {
                return Ok(url);
            }
            if !repeat {
                warn!("No working proxy found, retrying without country filter");
            }
        }

        Err(ProxyError::NoWorkingProxies)
    }

    async fn candidates(&self, config: &FreeProxyConfig, repeat: bool) -> Result<Vec<String>> {
        let url = select_source(&config.countries, repeat);
        info!("Fetching proxy list from {}", url);

        let rows = self.fetcher.fetch_rows(url).await?;
        let candidates = filter_rows(&rows, config);
        info!("{} of {} rows match", candidates.len(), rows.len().saturating_sub(1));
        Ok(candidates)
    }

    async fn resolve_pass(&self, config: &FreeProxyConfig, repeat: bool) -> Result<Option<String>> {
        let mut candidates = self.candidates(config, repeat).await?;
        if config.random {
            shuffle(&mut candidates);
        }

        let scheme = config.effective_scheme();
        let timeout = config.effective_timeout();

        for address in &candidates {
            if let Some(url) = self.checker.check(address, scheme, timeout).await {
                info!("Found working proxy {}", url);
                return Ok(Some(url));
            }
            debug!("{} is not working", address);
        }

        Ok(None)
    }
}

fn shuffle(candidates: &mut [String]) {
    candidates.shuffle(&mut rand::thread_rng());
}
