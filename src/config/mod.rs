//! Configuration module for the coin-candles application.

pub mod catalog;
pub mod coingecko;
pub mod debug;
pub mod plot;

// Re-export commonly used items
pub use catalog::{CatalogEntry, DEFAULT_CATALOG};
pub use coingecko::{COINGECKO, CoinGeckoApiConfig, ohlc_path};
pub use plot::CHART;
