//! CoinGecko-specific configuration constants and types.

use std::time::Duration;

/// Configuration for the REST client
/// (This is the runtime struct used by the Http source)
pub struct CoinGeckoApiConfig {
    pub base_url: String,
    /// `None` means requests may block indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for CoinGeckoApiConfig {
    fn default() -> Self {
        Self {
            base_url: COINGECKO.base_url.to_string(),
            timeout: COINGECKO.client.timeout_secs.map(Duration::from_secs),
        }
    }
}

impl CoinGeckoApiConfig {
    /// Apply command line overrides on top of the defaults.
    pub fn with_overrides(api_base: Option<&str>, timeout_secs: Option<u64>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base {
            config.base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(secs) = timeout_secs {
            config.timeout = Some(Duration::from_secs(secs));
        }
        config
    }
}

/// Endpoint paths and fixed query values
pub struct Endpoints {
    /// Batched current-price query for a list of coin ids
    pub markets_path: &'static str,
    /// Prefix for per-coin queries; the OHLC path is `{prefix}/{id}/ohlc`
    pub coins_prefix: &'static str,
    pub ohlc_suffix: &'static str,
}

/// Query parameters shared by every request
pub struct QueryDefaults {
    /// Only USD is supported
    pub vs_currency: &'static str,
    pub markets_order: &'static str,
}

/// Default values for the Rest Client
pub struct ClientDefaults {
    pub timeout_secs: Option<u64>,
    pub user_agent: &'static str,
}

/// The Master Configuration Struct
pub struct CoinGeckoConfig {
    pub base_url: &'static str,
    pub endpoints: Endpoints,
    pub query: QueryDefaults,
    pub client: ClientDefaults,
}

pub const COINGECKO: CoinGeckoConfig = CoinGeckoConfig {
    base_url: "https://api.coingecko.com/api/v3",
    endpoints: Endpoints {
        markets_path: "/coins/markets",
        coins_prefix: "/coins",
        ohlc_suffix: "/ohlc",
    },
    query: QueryDefaults {
        vs_currency: "usd",
        markets_order: "market_cap_desc",
    },
    client: ClientDefaults {
        // No timeout: a hung request hangs the session unless --timeout-secs is given
        timeout_secs: None,
        user_agent: concat!("coin-candles/", env!("CARGO_PKG_VERSION")),
    },
};

/// Path of the OHLC endpoint for one coin, e.g. `/coins/bitcoin/ohlc`
pub fn ohlc_path(asset_id: &str) -> String {
    format!(
        "{}/{}{}",
        COINGECKO.endpoints.coins_prefix, asset_id, COINGECKO.endpoints.ohlc_suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ohlc_path_embeds_asset_id() {
        assert_eq!(ohlc_path("bitcoin"), "/coins/bitcoin/ohlc");
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = CoinGeckoApiConfig::with_overrides(Some("http://localhost:8080/"), Some(5));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn default_has_no_timeout() {
        let config = CoinGeckoApiConfig::default();
        assert_eq!(config.base_url, COINGECKO.base_url);
        assert!(config.timeout.is_none());
    }
}
