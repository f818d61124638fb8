use std::fmt;

use serde_json::Value;
use tokio::time::Instant;

use crate::config::{COINGECKO, ohlc_path};
use crate::data::error::MarketDataError;
use crate::data::source::JsonSource;
use crate::domain::{Candle, HistoryWindow};
use crate::models::OhlcSeries;
use crate::utils::time_utils;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_SERIES_SUMMARY;

// Custom error type for a single provider row, for better error messages.
#[derive(Debug, PartialEq)]
pub enum OhlcRowError {
    NotAnArray,
    InvalidLength(usize),
    InvalidType(&'static str),
    TimestampOutOfRange(i64),
    BrokenInvariant,
}

impl fmt::Display for OhlcRowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OhlcRowError::NotAnArray => write!(f, "row is not an array"),
            OhlcRowError::InvalidLength(len) => {
                write!(f, "expected 5 values [time, open, high, low, close], got {}", len)
            }
            OhlcRowError::InvalidType(field) => write!(f, "{} is not a number", field),
            OhlcRowError::TimestampOutOfRange(ms) => write!(f, "timestamp {} is out of range", ms),
            OhlcRowError::BrokenInvariant => {
                write!(f, "prices violate low <= open,close <= high")
            }
        }
    }
}

impl std::error::Error for OhlcRowError {}

// Provider row is `[timestamp_ms, open, high, low, close]`
impl TryFrom<&Value> for Candle {
    type Error = OhlcRowError;

    fn try_from(row: &Value) -> Result<Self, Self::Error> {
        let items = row.as_array().ok_or(OhlcRowError::NotAnArray)?;
        if items.len() != 5 {
            return Err(OhlcRowError::InvalidLength(items.len()));
        }

        // Timestamps normally arrive as integers but tolerate "1.7e12"-style floats
        let timestamp_ms = items[0]
            .as_i64()
            .or_else(|| items[0].as_f64().map(|f| f as i64))
            .ok_or(OhlcRowError::InvalidType("timestamp"))?;
        let timestamp = time_utils::epoch_ms_to_datetime(timestamp_ms)
            .ok_or(OhlcRowError::TimestampOutOfRange(timestamp_ms))?;

        let price = |index: usize, field: &'static str| {
            items[index].as_f64().ok_or(OhlcRowError::InvalidType(field))
        };
        let candle = Candle::new(
            timestamp,
            price(1, "open")?,
            price(2, "high")?,
            price(3, "low")?,
            price(4, "close")?,
        );

        if !candle.is_well_formed() {
            return Err(OhlcRowError::BrokenInvariant);
        }
        Ok(candle)
    }
}

/// Validates the body and builds the series in the order received.
pub fn parse_ohlc_body(
    body: &Value,
    asset_id: &str,
    window: HistoryWindow,
) -> Result<OhlcSeries, MarketDataError> {
    let days = window.days();
    let rows = body
        .as_array()
        .ok_or_else(|| MarketDataError::empty(asset_id, days, "response is not a list"))?;

    let candles = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Candle::try_from(row)
                .map_err(|e| MarketDataError::empty(asset_id, days, format!("row {}: {}", i, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    OhlcSeries::new(candles)
        .ok_or_else(|| MarketDataError::empty(asset_id, days, "response list is empty"))
}

/// OHLC candles for one asset over `window`, USD. No retry and no re-sort.
pub async fn fetch_historical_series<S: JsonSource + ?Sized>(
    source: &S,
    asset_id: &str,
    window: HistoryWindow,
) -> Result<OhlcSeries, MarketDataError> {
    let path = ohlc_path(asset_id);
    let query = [
        ("vs_currency", COINGECKO.query.vs_currency.to_string()),
        ("days", window.days().to_string()),
    ];
    let start_time = Instant::now();

    let body = source.get_json(&path, &query).await.map_err(|e| {
        MarketDataError::external(format!("{} GET {}", source.signature(), path), e)
    })?;

    let series = parse_ohlc_body(&body, asset_id, window)?;

    log::info!(
        "{} returned {} candles for {} ({} days) in {:?}",
        source.signature(),
        series.len(),
        asset_id,
        window.days(),
        start_time.elapsed()
    );
    if !series.is_strictly_ascending() {
        log::warn!(
            "{}: candles are not in strictly ascending time order; keeping provider order",
            asset_id
        );
    }
    #[cfg(debug_assertions)]
    if PRINT_SERIES_SUMMARY {
        log::info!("{}: {}", asset_id, series);
    }

    Ok(series)
}
