use std::fmt;

use itertools::Itertools;

use crate::domain::candle::Candle;
use crate::utils::time_utils;

// ============================================================================
// OhlcSeries: candles for one asset over one window, in provider order
// ============================================================================

/// Non-empty by construction: there is no way to build an empty series.
#[derive(Debug, Clone, PartialEq)]
pub struct OhlcSeries {
    candles: Vec<Candle>,
}

#[allow(clippy::len_without_is_empty)]
impl OhlcSeries {
    /// Returns `None` for an empty candle list.
    pub fn new(candles: Vec<Candle>) -> Option<Self> {
        if candles.is_empty() {
            None
        } else {
            Some(Self { candles })
        }
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn first(&self) -> &Candle {
        &self.candles[0]
    }

    pub fn last(&self) -> &Candle {
        &self.candles[self.candles.len() - 1]
    }

    /// (lowest low, highest high) across the series
    pub fn price_range(&self) -> (f64, f64) {
        self.candles.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), c| (lo.min(c.low_price), hi.max(c.high_price)),
        )
    }

    /// True when every timestamp is later than the one before it.
    /// The fetcher does not enforce this; it is only reported.
    pub fn is_strictly_ascending(&self) -> bool {
        self.candles
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.timestamp < b.timestamp)
    }

    /// Median gap between consecutive candles in seconds. `None` for a single candle.
    pub fn median_spacing_secs(&self) -> Option<f64> {
        let mut gaps: Vec<f64> = self
            .candles
            .iter()
            .tuple_windows()
            .map(|(a, b)| (b.timestamp_secs_f64() - a.timestamp_secs_f64()).abs())
            .filter(|gap| *gap > 0.0)
            .collect();
        if gaps.is_empty() {
            return None;
        }
        gaps.sort_by(|a, b| a.total_cmp(b));
        Some(gaps[gaps.len() / 2])
    }

    /// Candle whose timestamp is closest to `secs` (plot x coordinate)
    pub fn nearest_candle(&self, secs: f64) -> &Candle {
        self.candles
            .iter()
            .min_by(|a, b| {
                let da = (a.timestamp_secs_f64() - secs).abs();
                let db = (b.timestamp_secs_f64() - secs).abs();
                da.total_cmp(&db)
            })
            .unwrap_or_else(|| self.first())
    }
}

impl fmt::Display for OhlcSeries {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (lo, hi) = self.price_range();
        write!(
            f,
            "{} candles from {} to {}, range {:.2} - {:.2}",
            self.len(),
            time_utils::epoch_ms_to_utc(self.first().timestamp_ms()),
            time_utils::epoch_ms_to_utc(self.last().timestamp_ms()),
            lo,
            hi
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn candle_at(ms: i64, low: f64, high: f64) -> Candle {
        let ts = DateTime::from_timestamp_millis(ms).unwrap();
        Candle::new(ts, low, high, low, high)
    }

    #[test]
    fn empty_input_is_not_a_series() {
        assert!(OhlcSeries::new(Vec::new()).is_none());
    }

    #[test]
    fn price_range_spans_lows_and_highs() {
        let series = OhlcSeries::new(vec![
            candle_at(0, 95.0, 110.0),
            candle_at(1_800_000, 90.0, 105.0),
            candle_at(3_600_000, 100.0, 120.0),
        ])
        .unwrap();
        assert_eq!(series.price_range(), (90.0, 120.0));
        assert_eq!(series.len(), 3);
        assert_eq!(series.first().timestamp_ms(), 0);
        assert_eq!(series.last().timestamp_ms(), 3_600_000);
    }

    #[test]
    fn ordering_is_reported_not_fixed() {
        let series = OhlcSeries::new(vec![
            candle_at(3_600_000, 1.0, 2.0),
            candle_at(0, 1.0, 2.0),
        ])
        .unwrap();
        assert!(!series.is_strictly_ascending());
        // Provider order is kept as-is
        assert_eq!(series.first().timestamp_ms(), 3_600_000);

        let duplicate = OhlcSeries::new(vec![candle_at(0, 1.0, 2.0), candle_at(0, 1.0, 2.0)]).unwrap();
        assert!(!duplicate.is_strictly_ascending());
    }

    #[test]
    fn median_spacing_of_regular_series() {
        let series = OhlcSeries::new(
            (0..5)
                .map(|i| candle_at(i * 1_800_000, 1.0, 2.0))
                .collect(),
        )
        .unwrap();
        assert_eq!(series.median_spacing_secs(), Some(1800.0));
        assert!(series.is_strictly_ascending());

        let single = OhlcSeries::new(vec![candle_at(0, 1.0, 2.0)]).unwrap();
        assert_eq!(single.median_spacing_secs(), None);
    }

    #[test]
    fn nearest_candle_picks_closest_timestamp() {
        let series = OhlcSeries::new(vec![
            candle_at(0, 1.0, 2.0),
            candle_at(1_800_000, 3.0, 4.0),
            candle_at(3_600_000, 5.0, 6.0),
        ])
        .unwrap();
        assert_eq!(series.nearest_candle(1_700.0).timestamp_ms(), 1_800_000);
        assert_eq!(series.nearest_candle(-50.0).timestamp_ms(), 0);
        assert_eq!(series.nearest_candle(1e9).timestamp_ms(), 3_600_000);
    }
}
