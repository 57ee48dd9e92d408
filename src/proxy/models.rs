//! Proxy data models

use crate::error::ProxyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transport scheme used both for the proxy URL and the probe request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Http => write!(f, "http"),
            Scheme::Https => write!(f, "https"),
        }
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            _ => Err(format!("Invalid scheme: {}. Use: http, https", s)),
        }
    }
}

/// Constraint on the "Google" column of a listing row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GoogleFilter {
    /// No constraint
    #[default]
    Any,
    /// Row must be marked "yes"
    Listed,
    /// Row must not be marked "yes"
    NotListed,
}

impl GoogleFilter {
    /// Check a raw Google indicator cell against this filter
    pub fn accepts(&self, indicator: &str) -> bool {
        match self {
            GoogleFilter::Any => true,
            GoogleFilter::Listed => indicator == "yes",
            GoogleFilter::NotListed => indicator != "yes",
        }
    }
}

impl From<Option<bool>> for GoogleFilter {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => GoogleFilter::Any,
            Some(true) => GoogleFilter::Listed,
            Some(false) => GoogleFilter::NotListed,
        }
    }
}

/// One scraped row of a proxy listing table.
///
/// Cells are positional: ip, port, country code, region, anonymity,
/// google, https. Missing cells read as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProxyRow {
    pub cells: Vec<String>,
}

impl ProxyRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn ip(&self) -> &str {
        self.cell(0)
    }

    pub fn port(&self) -> &str {
        self.cell(1)
    }

    pub fn country_code(&self) -> &str {
        self.cell(2)
    }

    pub fn anonymity(&self) -> &str {
        self.cell(4)
    }

    pub fn google(&self) -> &str {
        self.cell(5)
    }

    pub fn https(&self) -> &str {
        self.cell(6)
    }

    /// Get the row's address in IP:PORT format
    pub fn address(&self) -> String {
        format!("{}:{}", self.ip(), self.port())
    }
}

impl<S: Into<String>> FromIterator<S> for ProxyRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A candidate proxy parsed from an IP:PORT address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proxy {
    pub host: String,
    pub port: u16,
    pub scheme: Scheme,
}

impl Proxy {
    pub fn new(host: String, port: u16, scheme: Scheme) -> Self {
        Self { host, port, scheme }
    }

    /// Parse a `host:port` address
    pub fn from_address(address: &str, scheme: Scheme) -> Result<Self, ProxyError> {
        let invalid = || ProxyError::InvalidAddress(address.to_string());

        let (host, port) = address.trim().rsplit_once(':').ok_or_else(invalid)?;
        if host.is_empty() || host.contains('/') || host.contains('@') {
            return Err(invalid());
        }
        let port: u16 = port.parse().map_err(|_| invalid())?;

        Ok(Self::new(host.to_string(), port, scheme))
    }

    /// Get the proxy URL string
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

impl fmt::Display for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url())
    }
}
