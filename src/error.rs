//! Error types surfaced by the proxy resolver

use thiserror::Error;

/// Errors produced while fetching and resolving proxies
#[derive(Debug, Error)]
pub enum ProxyError {
    /// An HTTP client could not be constructed
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    /// The listing page could not be retrieved
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The listing page was retrieved but did not contain a proxy table
    #[error("failed to parse document from {url}: {reason}")]
    Parse { url: String, reason: String },
    /// A candidate address could not be turned into a proxy URL
    #[error("invalid proxy address: {0}")]
    InvalidAddress(String),
    /// Every candidate failed, including the relaxed retry pass
    #[error("there are no working proxies at this time")]
    NoWorkingProxies,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ProxyError::NoWorkingProxies.to_string(),
            "there are no working proxies at this time"
        );
        let err = ProxyError::Parse {
            url: "https://www.sslproxies.org".to_string(),
            reason: "missing #list table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse document from https://www.sslproxies.org: missing #list table"
        );
        assert_eq!(
            ProxyError::InvalidAddress("1.2.3.4".to_string()).to_string(),
            "invalid proxy address: 1.2.3.4"
        );
    }
}
