// Normalized market data produced by the fetchers
// Pure values, independent of transport and UI

pub mod ohlc_series;
pub mod snapshot;

// Re-export key types for convenience
pub use ohlc_series::OhlcSeries;
pub use snapshot::{MarketRecord, PriceSnapshotRow};
