//! Proxy checker module for probing candidate liveness

use crate::error::ProxyError;
use crate::proxy::models::{Proxy, Scheme};
use crate::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Proxy as ReqwestProxy, StatusCode};
use std::time::Duration;

/// Default host requested through each candidate
const DEFAULT_TARGET_HOST: &str = "www.example.com";

/// Probes a single candidate address
#[async_trait]
pub trait LivenessChecker: Send + Sync {
    /// Returns the proxy URL when the candidate forwards a request
    /// successfully, `None` otherwise
    async fn check(&self, address: &str, scheme: Scheme, timeout: Duration) -> Option<String>;
}

/// Configuration for proxy checker
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Host requested through the proxy
    pub target_host: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            target_host: DEFAULT_TARGET_HOST.to_string(),
        }
    }
}

impl CheckerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target_host(mut self, host: String) -> Self {
        self.target_host = host;
        self
    }

    /// URL requested through the proxy for the given scheme
    pub fn target_url(&self, scheme: Scheme) -> String {
        format!("{}://{}", scheme, self.target_host)
    }
}

/// Proxy checker for validating proxies over the network
#[derive(Debug, Clone, Default)]
pub struct ProxyChecker {
    config: CheckerConfig,
}

impl ProxyChecker {
    /// Create a new proxy checker with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new proxy checker with custom configuration
    pub fn with_config(config: CheckerConfig) -> Self {
        Self { config }
    }

    /// Probe one proxy, reporting whether the target answered with 200
    pub async fn check_proxy(&self, proxy: &Proxy, timeout: Duration) -> Result<bool> {
        let client = Self::create_client(proxy, timeout)?;
        let target = self.config.target_url(proxy.scheme);

        let outcome = tokio::time::timeout(timeout, client.get(&target).send()).await;
        // The client has no idle pool; dropping it here closes the connection
        drop(client);

        match outcome {
            Ok(Ok(response)) => {
                let status = response.status();
                debug!("{} answered {} via {}", response.url(), status, proxy);
                Ok(status == StatusCode::OK)
            }
            Ok(Err(e)) => {
                debug!("{} failed: {}", proxy, e);
                Ok(false)
            }
            Err(_) => {
                debug!("{} timed out after {:?}", proxy, timeout);
                Ok(false)
            }
        }
    }

    /// Create a single-use reqwest client routed through the proxy
    fn create_client(proxy: &Proxy, timeout: Duration) -> Result<Client> {
        let proxy_url = proxy.url();

        let reqwest_proxy =
            ReqwestProxy::all(&proxy_url).map_err(|_| ProxyError::InvalidAddress(proxy_url))?;

        let client = Client::builder()
            .proxy(reqwest_proxy)
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ProxyError::Client)?;

        Ok(client)
    }
}

#[async_trait]
impl LivenessChecker for ProxyChecker {
    async fn check(&self, address: &str, scheme: Scheme, timeout: Duration) -> Option<String> {
        let proxy = match Proxy::from_address(address, scheme) {
            Ok(proxy) => proxy,
            Err(e) => {
                debug!("Skipping candidate: {}", e);
                return None;
            }
        };

        match self.check_proxy(&proxy, timeout).await {
            Ok(true) => Some(proxy.url()),
            Ok(false) => None,
            Err(e) => {
                debug!("Skipping candidate {}: {}", address, e);
                None
            }
        }
    }
}
