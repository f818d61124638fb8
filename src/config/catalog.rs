//! Built-in asset catalog

/// One row of the built-in catalog. Turned into an `AssetDescriptor` at start-up.
pub struct CatalogEntry {
    /// CoinGecko coin id (what the API wants in `ids=` and in the OHLC path)
    pub id: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Tracked assets, in the order they are sent to the price service
pub const DEFAULT_CATALOG: &[CatalogEntry] = &[
    CatalogEntry { id: "bitcoin", symbol: "BTC", name: "Bitcoin" },
    CatalogEntry { id: "ethereum", symbol: "ETH", name: "Ethereum" },
    CatalogEntry { id: "ripple", symbol: "XRP", name: "XRP" },
    CatalogEntry { id: "binancecoin", symbol: "BNB", name: "Binance Coin" },
    CatalogEntry { id: "solana", symbol: "SOL", name: "Solana" },
    CatalogEntry { id: "dogecoin", symbol: "DOGE", name: "Dogecoin" },
    CatalogEntry { id: "cardano", symbol: "ADA", name: "Cardano" },
    CatalogEntry { id: "tron", symbol: "TRX", name: "TRON" },
    CatalogEntry { id: "hyperliquid", symbol: "HYPE", name: "Hyperliquid" },
    CatalogEntry { id: "sui", symbol: "SUI", name: "Sui" },
];
