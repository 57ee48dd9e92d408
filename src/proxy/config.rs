//! Resolver configuration

use crate::proxy::models::{GoogleFilter, Scheme};
use std::time::Duration;

/// Default timeout for each liveness check in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Criteria and behaviour for one proxy resolution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FreeProxyConfig {
    /// Country codes; only the first one is enforced when filtering rows
    pub countries: Vec<String>,
    /// Liveness check timeout in seconds
    pub timeout: Option<f64>,
    /// Try candidates in random order
    pub random: bool,
    /// Require the "anonymous" label
    pub anonym: bool,
    /// Accepted for completeness, row filtering does not read it
    pub elite: bool,
    /// Constraint on the Google-listed column
    pub google: GoogleFilter,
    /// Require HTTPS support
    pub https: bool,
    /// Transport scheme, derived from `https` when unset
    pub scheme: Option<Scheme>,
}

impl FreeProxyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, seconds: f64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    pub fn with_random(mut self, random: bool) -> Self {
        self.random = random;
        self
    }

    pub fn with_anonym(mut self, anonym: bool) -> Self {
        self.anonym = anonym;
        self
    }

    pub fn with_elite(mut self, elite: bool) -> Self {
        self.elite = elite;
        self
    }

    pub fn with_google(mut self, google: impl Into<GoogleFilter>) -> Self {
        self.google = google.into();
        self
    }

    pub fn with_https(mut self, https: bool) -> Self {
        self.https = https;
        self
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Timeout to use for liveness checks, falling back to the default
    /// when unset, not a positive number, or too large for a `Duration`
    pub fn effective_timeout(&self) -> Duration {
        self.timeout
            .filter(|t| *t > 0.0)
            .and_then(|t| Duration::try_from_secs_f64(t).ok())
            .unwrap_or_else(|| Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS))
    }

    /// Scheme to probe with
    pub fn effective_scheme(&self) -> Scheme {
        match self.scheme {
            Some(scheme) => scheme,
            None if self.https => Scheme::Https,
            None => Scheme::Http,
        }
    }

    /// Copy of this configuration with every default resolved
    pub fn resolved(&self) -> Self {
        Self {
            timeout: Some(self.effective_timeout().as_secs_f64()),
            scheme: Some(self.effective_scheme()),
            ..self.clone()
        }
    }

    /// Copy of this configuration without country targeting, used by the
    /// fallback pass
    pub fn without_countries(&self) -> Self {
        Self {
            countries: Vec::new(),
            ..self.clone()
        }
    }
}
