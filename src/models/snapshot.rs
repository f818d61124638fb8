use serde::Deserialize;
use tabled::Tabled;

use crate::utils::format_utils::format_usd;

/// One record of the `/coins/markets` response.
/// Everything except these three fields is ignored on decode.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MarketRecord {
    pub name: String,
    pub symbol: String,
    pub current_price: f64,
}

/// One line of the current-price table, in provider order.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct PriceSnapshotRow {
    #[tabled(rename = "Name")]
    pub display_name: String,
    #[tabled(rename = "Symbol")]
    pub symbol: String,
    #[tabled(rename = "Price")]
    pub formatted_price: String,
}

impl PriceSnapshotRow {
    /// Menu label, e.g. "Bitcoin (btc)"
    pub fn menu_label(&self) -> String {
        format!("{} ({})", self.display_name, self.symbol)
    }
}

impl From<MarketRecord> for PriceSnapshotRow {
    fn from(record: MarketRecord) -> Self {
        PriceSnapshotRow {
            formatted_price: format_usd(record.current_price),
            display_name: record.name,
            symbol: record.symbol,
        }
    }
}
