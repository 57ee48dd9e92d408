//! Listing page selection

use crate::proxy::models::Scheme;

/// General listing, used for the relaxed retry pass
pub const GENERAL_LIST_URL: &str = "https://free-proxy-list.net";

/// US-only listing
pub const US_LIST_URL: &str = "https://www.us-proxy.org";

/// UK-only listing
pub const GB_LIST_URL: &str = "https://free-proxy-list.net/uk-proxy.html";

/// SSL proxy listing, used when no country-specific page applies
pub const SSL_LIST_URL: &str = "https://www.sslproxies.org";

/// Proxy source representing a website that provides proxy lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySource {
    /// Name of the proxy source
    pub name: String,
    /// URL to fetch proxies from
    pub url: String,
    /// Scheme most proxies on this page advertise. Informational only:
    /// shown by `--sources`, never used for filtering or probing
    pub scheme: Scheme,
}

impl ProxySource {
    pub fn new(name: &str, url: &str, scheme: Scheme) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            scheme,
        }
    }

    /// Every listing page the resolver may query
    pub fn known() -> Vec<ProxySource> {
        vec![
            ProxySource::new("free-proxy-list.net", GENERAL_LIST_URL, Scheme::Http),
            ProxySource::new("us-proxy.org", US_LIST_URL, Scheme::Http),
            ProxySource::new("uk-proxy", GB_LIST_URL, Scheme::Http),
            ProxySource::new("sslproxies", SSL_LIST_URL, Scheme::Https),
        ]
    }
}

/// Pick the listing page for a resolution pass
pub fn select_source<S: AsRef<str>>(countries: &[S], repeat: bool) -> &'static str {
    let has = |code: &str| countries.iter().any(|c| c.as_ref() == code);

    if repeat {
        GENERAL_LIST_URL
    } else if has("US") {
        US_LIST_URL
    } else if has("GB") {
        GB_LIST_URL
    } else {
        SSL_LIST_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_always_uses_general_page() {
        assert_eq!(select_source(&["US"], true), GENERAL_LIST_URL);
        assert_eq!(select_source(&["GB"], true), GENERAL_LIST_URL);
        assert_eq!(select_source::<&str>(&[], true), GENERAL_LIST_URL);
    }

    #[test]
    fn test_country_pages() {
        assert_eq!(select_source(&["US"], false), US_LIST_URL);
        assert_eq!(select_source(&["GB"], false), GB_LIST_URL);
        // Membership, not position, decides the page
        assert_eq!(select_source(&["GB", "US"], false), US_LIST_URL);
        assert_eq!(select_source(&["FR", "GB"], false), GB_LIST_URL);
    }

    #[test]
    fn test_fallback_is_deterministic() {
        for _ in 0..10 {
            assert_eq!(select_source(&["DE"], false), SSL_LIST_URL);
            assert_eq!(select_source::<String>(&[], false), SSL_LIST_URL);
        }
    }

    #[test]
    fn test_known_sources() {
        let sources = ProxySource::known();
        assert_eq!(sources.len(), 4);
        for source in &sources {
            assert!(!source.name.is_empty());
            assert!(source.url.starts_with("https://"));
        }
    }
}
