use anyhow::{anyhow, Result};
use clap::Parser;
use free_proxy::{
    proxy::{
        CheckerConfig, CrawlerConfig, FreeProxy, FreeProxyConfig, ProxyChecker, ProxyCrawler,
        ProxySource,
    },
    Scheme,
};
use std::time::Duration;

/// Find a working free proxy
#[derive(Parser)]
#[command(name = "free-proxy")]
#[command(about = "Scrape free proxy lists and print the first working proxy")]
struct Cli {
    /// Country code to filter by (can specify multiple, only the first is enforced)
    #[arg(short, long = "country")]
    countries: Vec<String>,

    /// Timeout in seconds for each proxy check
    #[arg(short, long)]
    timeout: Option<f64>,

    /// Try proxies in random order
    #[arg(short, long)]
    random: bool,

    /// Require anonymous proxies
    #[arg(short, long)]
    anonym: bool,

    /// Require elite proxies
    #[arg(short, long)]
    elite: bool,

    /// Require (true) or exclude (false) Google-listed proxies
    #[arg(short, long)]
    google: Option<bool>,

    /// Require HTTPS support
    #[arg(long)]
    https: bool,

    /// Scheme used for the proxy URL and the check (http, https)
    #[arg(short, long)]
    scheme: Option<String>,

    /// Print matching proxies from one listing instead of checking them
    #[arg(short, long)]
    list: bool,

    /// Print the known listing pages and exit
    #[arg(long)]
    sources: bool,

    /// Timeout in seconds for fetching the listing page
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    fetch_timeout: u64,

    /// Host requested through each proxy
    #[arg(long, default_value = "www.example.com")]
    target_host: String,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli.log_level)?;

    if cli.sources {
        for source in ProxySource::known() {
            println!("{:<20} {:<6} {}", source.name, source.scheme.to_string(), source.url);
        }
        return Ok(());
    }

    let mut config = FreeProxyConfig::new()
        .with_countries(cli.countries)
        .with_random(cli.random)
        .with_anonym(cli.anonym)
        .with_elite(cli.elite)
        .with_google(cli.google)
        .with_https(cli.https);
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    if let Some(scheme) = cli.scheme {
        config = config.with_scheme(parse_scheme(&scheme)?);
    }

    let crawler = ProxyCrawler::with_config(
        CrawlerConfig::new().with_timeout(Duration::from_secs(cli.fetch_timeout)),
    )?;
    let checker =
        ProxyChecker::with_config(CheckerConfig::new().with_target_host(cli.target_host));
    let free_proxy = FreeProxy::with_parts(config, crawler, checker);

    if cli.list {
        let proxies = free_proxy.get_proxy_list(false).await?;
        if proxies.is_empty() {
            eprintln!("No proxies match the given criteria.");
        }
        for proxy in proxies {
            println!("{}", proxy);
        }
        return Ok(());
    }

    let proxy = free_proxy.get().await?;
    println!("{}", proxy);

    Ok(())
}

fn initialize_logging(level: &str) -> Result<()> {
    let level = match level.to_lowercase().as_str() {
        "off" => log::LevelFilter::Off,
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => {
            return Err(anyhow!(
                "Invalid log level: {}. Use: off, error, warn, info, debug, trace",
                level
            ))
        }
    };

    stderrlog::new()
        .module("free_proxy")
        .show_module_names(true)
        .verbosity(level)
        .init()?;
    Ok(())
}

fn parse_scheme(s: &str) -> Result<Scheme> {
    s.parse::<Scheme>().map_err(|e| anyhow!(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_timeout_rejects_zero() {
        assert!(Cli::try_parse_from(["free-proxy", "--fetch-timeout", "0"]).is_err());
    }

    #[test]
    fn test_fetch_timeout_accepts_positive() {
        let cli = Cli::try_parse_from(["free-proxy", "--fetch-timeout", "5"]).unwrap();
        assert_eq!(cli.fetch_timeout, 5);

        let cli = Cli::try_parse_from(["free-proxy"]).unwrap();
        assert_eq!(cli.fetch_timeout, 30);
    }
}
