#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{CoinGeckoHttp, JsonSource, MarketDataError, fetch_current_prices, fetch_historical_series};
pub use domain::{AssetDescriptor, Candle, Catalog, HistoryWindow};
pub use engine::{SessionEngine, exit_status, failure_message};
pub use models::{OhlcSeries, PriceSnapshotRow};
pub use ui::{ChartRenderer, NativeChartRenderer};

// CLI argument parsing
use anyhow::Context;
use clap::Parser;

use crate::config::CoinGeckoApiConfig;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the price service (default: CoinGecko v3)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Give up on a request after this many seconds (default: wait indefinitely)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// Interactive session on the process terminal with a native chart window.
/// This is the public API for the binary to call
pub fn run_interactive(args: &Cli) -> anyhow::Result<()> {
    let api_config =
        CoinGeckoApiConfig::with_overrides(args.api_base.as_deref(), args.timeout_secs);
    log::info!("Using price service at {}", api_config.base_url);

    let catalog = Catalog::from_config().context("built-in asset catalog is invalid")?;
    let source = CoinGeckoHttp::new(&api_config).context("failed to build the HTTP client")?;
    let engine = SessionEngine::new(&catalog, source, NativeChartRenderer)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    engine.run(&mut stdin.lock(), &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_no_overrides() {
        let args = Cli::parse_from(["coin-candles"]);
        assert!(args.api_base.is_none());
        assert!(args.timeout_secs.is_none());
    }

    #[test]
    fn cli_accepts_overrides() {
        let args = Cli::parse_from([
            "coin-candles",
            "--api-base",
            "http://localhost:8080/api/v3/",
            "--timeout-secs",
            "15",
        ]);
        assert_eq!(args.api_base.as_deref(), Some("http://localhost:8080/api/v3/"));
        assert_eq!(args.timeout_secs, Some(15));

        let config = CoinGeckoApiConfig::with_overrides(args.api_base.as_deref(), args.timeout_secs);
        assert_eq!(config.base_url, "http://localhost:8080/api/v3");
    }

    #[test]
    fn cli_rejects_non_numeric_timeout() {
        assert!(Cli::try_parse_from(["coin-candles", "--timeout-secs", "soon"]).is_err());
    }
}
