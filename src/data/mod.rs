// Market data acquisition and normalization
pub mod error;
pub mod historical;
pub mod market_snapshot;
pub mod source;

// Re-export commonly used types
pub use error::{MarketDataError, TransportError};
pub use historical::fetch_historical_series;
pub use market_snapshot::fetch_current_prices;
pub use source::{CoinGeckoHttp, JsonSource};
