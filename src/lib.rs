//! Free Proxy - scrape, filter and validate free proxies
//!
//! Fetches public proxy list pages, keeps the rows that match the caller's
//! criteria and returns the first proxy that actually forwards a request.

pub mod error;
pub mod proxy;

pub use error::ProxyError;
pub use proxy::*;

/// Library result type
pub type Result<T> = std::result::Result<T, ProxyError>;
