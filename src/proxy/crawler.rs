//! Proxy crawler module for fetching listing pages
//!
//! This module provides functionality for:
//! - Fetching proxy listing pages over HTTP
//! - Parsing the `#list` HTML table into positional rows
//! - Abstracting both behind the `ListFetcher` trait so the resolver can
//!   run against any row source

use crate::error::ProxyError;
use crate::proxy::models::ProxyRow;
use crate::Result;
use async_trait::async_trait;
use log::debug;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;

/// Default timeout for HTTP requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent for HTTP requests
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#list").expect("Invalid table selector"));

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("Invalid row selector"));

static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th, td").expect("Invalid cell selector"));

/// Source of raw listing rows
#[async_trait]
pub trait ListFetcher: Send + Sync {
    /// Fetch one listing page and return its table rows, header included
    async fn fetch_rows(&self, url: &str) -> Result<Vec<ProxyRow>>;
}

/// Configuration for proxy crawler
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Timeout for HTTP requests
    pub timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CrawlerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Proxy crawler for fetching listing pages
pub struct ProxyCrawler {
    client: Client,
}

impl ProxyCrawler {
    /// Create a new proxy crawler with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(CrawlerConfig::default())
    }

    /// Create a new proxy crawler with custom configuration
    pub fn with_config(config: CrawlerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(ProxyError::Client)?;

        Ok(Self { client })
    }

    /// Parse the rows of the `#list` table from an HTML document
    pub fn parse_rows(url: &str, content: &str) -> Result<Vec<ProxyRow>> {
        let document = Html::parse_document(content);

        let table = document
            .select(&TABLE_SELECTOR)
            .next()
            .ok_or_else(|| ProxyError::Parse {
                url: url.to_string(),
                reason: "missing #list table".to_string(),
            })?;

        let rows = table
            .select(&ROW_SELECTOR)
            .map(|row| {
                row.select(&CELL_SELECTOR)
                    .map(|cell| cell.text().collect::<String>().trim().to_string())
                    .collect::<ProxyRow>()
            })
            .collect();

        Ok(rows)
    }
}

#[async_trait]
impl ListFetcher for ProxyCrawler {
    async fn fetch_rows(&self, url: &str) -> Result<Vec<ProxyRow>> {
        let fetch_error = |source: reqwest::Error| ProxyError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fetch_error)?;
        let content = response.text().await.map_err(fetch_error)?;

        let rows = Self::parse_rows(url, &content)?;
        debug!("Fetched {} rows from {}", rows.len(), url);
        Ok(rows)
    }
}
