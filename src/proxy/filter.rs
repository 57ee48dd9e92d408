//! Row filtering for scraped proxy listings

use crate::proxy::config::FreeProxyConfig;
use crate::proxy::models::ProxyRow;

/// Check whether a listing row satisfies every active criterion.
///
/// Country, elite and anonymity checks only apply when at least one
/// country is configured, and only the first configured country is
/// compared. The `elite` flag itself is not consulted.
pub fn matches_criteria(row: &ProxyRow, config: &FreeProxyConfig) -> bool {
    let first_country = config.countries.first();

    let country = first_country.map_or(true, |code| row.country_code() == code.as_str());
    let elite = first_country.is_none() || row.anonymity().contains("elite");
    let anonym =
        first_country.is_none() || !config.anonym || row.anonymity().contains("anonymous");
    let google = config.google.accepts(row.google());
    let https = !config.https || row.https().to_lowercase() == "yes";

    country && elite && anonym && google && https
}

/// Turn raw listing rows into candidate addresses.
///
/// The first row is the table header and is skipped. Input order is kept.
pub fn filter_rows(rows: &[ProxyRow], config: &FreeProxyConfig) -> Vec<String> {
    rows.iter()
        .skip(1)
        .filter(|row| matches_criteria(row, config))
        .map(ProxyRow::address)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::models::GoogleFilter;

    fn row(cells: [&str; 7]) -> ProxyRow {
        cells.into_iter().collect()
    }

    fn header() -> ProxyRow {
        row([
            "IP Address",
            "Port",
            "Code",
            "Country",
            "Anonymity",
            "Google",
            "Https",
        ])
    }

    #[test]
    fn test_empty_countries_ignore_country_elite_anonym() {
        let config = FreeProxyConfig::new().with_anonym(true).with_elite(true);
        let rows = [
            row(["1.1.1.1", "80", "DE", "", "transparent", "no", "no"]),
            row(["2.2.2.2", "80", "", "", "", "", ""]),
            row(["3.3.3.3", "80", "US", "", "elite proxy", "yes", "yes"]),
        ];
        for r in &rows {
            assert!(matches_criteria(r, &config));
        }
    }

    #[test]
    fn test_country_uses_first_entry_only() {
        let config = FreeProxyConfig::new().with_countries(["GB", "US"]);
        let gb = row(["1.1.1.1", "80", "GB", "", "elite proxy", "no", "no"]);
        let us = row(["2.2.2.2", "80", "US", "", "elite proxy", "no", "no"]);
        assert!(matches_criteria(&gb, &config));
        assert!(!matches_criteria(&us, &config));
    }

    #[test]
    fn test_country_requires_elite_label() {
        let config = FreeProxyConfig::new().with_countries(["US"]);
        let anonymous = row(["1.1.1.1", "80", "US", "", "anonymous", "no", "no"]);
        let elite = row(["2.2.2.2", "80", "US", "", "elite proxy", "no", "no"]);
        assert!(!matches_criteria(&anonymous, &config));
        assert!(matches_criteria(&elite, &config));
    }

    #[test]
    fn test_anonym_needs_both_labels_with_country() {
        let config = FreeProxyConfig::new().with_countries(["US"]).with_anonym(true);
        let elite = row(["1.1.1.1", "80", "US", "", "elite proxy", "no", "no"]);
        let both = row(["2.2.2.2", "80", "US", "", "elite anonymous", "no", "no"]);
        assert!(!matches_criteria(&elite, &config));
        assert!(matches_criteria(&both, &config));
    }

    #[test]
    fn test_google_listed_requires_exact_yes() {
        let config = FreeProxyConfig::new().with_google(GoogleFilter::Listed);
        for indicator in ["no", "Yes", "YES", "", "yes "] {
            let r = row(["1.1.1.1", "80", "US", "", "", indicator, "no"]);
            assert!(!matches_criteria(&r, &config), "accepted {:?}", indicator);
        }
        let r = row(["1.1.1.1", "80", "US", "", "", "yes", "no"]);
        assert!(matches_criteria(&r, &config));
    }

    #[test]
    fn test_google_not_listed() {
        let config = FreeProxyConfig::new().with_google(Some(false));
        let listed = row(["1.1.1.1", "80", "US", "", "", "yes", "no"]);
        let unlisted = row(["1.1.1.1", "80", "US", "", "", "no", "no"]);
        assert!(!matches_criteria(&listed, &config));
        assert!(matches_criteria(&unlisted, &config));
    }

    #[test]
    fn test_https_case_insensitive() {
        let config = FreeProxyConfig::new().with_https(true);
        let upper = row(["1.1.1.1", "80", "US", "", "", "no", "YES"]);
        let no = row(["1.1.1.1", "80", "US", "", "", "no", "no"]);
        assert!(matches_criteria(&upper, &config));
        assert!(!matches_criteria(&no, &config));
    }

    #[test]
    fn test_filter_rows_skips_header_and_keeps_order() {
        let config = FreeProxyConfig::new().with_https(true);
        let rows = vec![
            header(),
            row(["1.1.1.1", "80", "US", "", "", "no", "yes"]),
            row(["2.2.2.2", "81", "US", "", "", "no", "no"]),
            row(["3.3.3.3", "82", "US", "", "", "no", "yes"]),
        ];
        assert_eq!(
            filter_rows(&rows, &config),
            vec!["1.1.1.1:80".to_string(), "3.3.3.3:82".to_string()]
        );
    }

    #[test]
    fn test_filter_rows_header_never_emitted() {
        // A header that would itself pass the filter is still skipped
        let rows = vec![row(["9.9.9.9", "1", "", "", "", "", ""])];
        assert!(filter_rows(&rows, &FreeProxyConfig::new()).is_empty());
        assert!(filter_rows(&[], &FreeProxyConfig::new()).is_empty());
    }

    #[test]
    fn test_filter_rows_idempotent() {
        let config = FreeProxyConfig::new().with_countries(["US"]);
        let rows = vec![
            header(),
            row(["1.1.1.1", "80", "US", "", "elite proxy", "no", "yes"]),
            row(["2.2.2.2", "81", "DE", "", "elite proxy", "no", "no"]),
            row(["3.3.3.3", "82", "US", "", "elite proxy", "yes", "no"]),
        ];
        let first = filter_rows(&rows, &config);
        let second = filter_rows(&rows, &config);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
