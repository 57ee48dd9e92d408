//! Proxy module for finding a working free proxy
//!
//! This module provides functionality for:
//! - Fetching proxy listing pages and parsing their tables
//! - Filtering listing rows by country, anonymity, Google and HTTPS criteria
//! - Probing candidates one at a time until one forwards a request
//! - Falling back once to the general listing without country targeting

pub mod checker;
pub mod config;
pub mod crawler;
pub mod filter;
pub mod models;
pub mod resolver;
pub mod source;

pub use checker::{CheckerConfig, LivenessChecker, ProxyChecker};
pub use config::FreeProxyConfig;
pub use crawler::{CrawlerConfig, ListFetcher, ProxyCrawler};
pub use filter::{filter_rows, matches_criteria};
pub use models::{GoogleFilter, Proxy, ProxyRow, Scheme};
pub use resolver::FreeProxy;
pub use source::{select_source, ProxySource};
