use chrono::{DateTime, Utc};

// Define the CandleType enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

/// One time bucket of USD prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
}

// Implement methods for the Candle struct
impl Candle {
    // A constructor for convenience (same argument order as the provider's rows)
    pub fn new(
        timestamp: DateTime<Utc>,
        open_price: f64,
        high_price: f64,
        low_price: f64,
        close_price: f64,
    ) -> Self {
        Candle {
            timestamp,
            open_price,
            high_price,
            low_price,
            close_price,
        }
    }

    /// Prices are finite, non-negative and `low <= open,close <= high`.
    pub fn is_well_formed(&self) -> bool {
        let prices = [
            self.open_price,
            self.high_price,
            self.low_price,
            self.close_price,
        ];
        if prices.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return false;
        }
        let (body_low, body_high) = self.body_range();
        self.low_price <= body_low && body_high <= self.high_price
    }

    // A method to determine the type of candle
    pub fn get_type(&self) -> CandleType {
        if self.close_price >= self.open_price {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        match self.get_type() {
            CandleType::Bullish => (self.open_price, self.close_price),
            CandleType::Bearish => (self.close_price, self.open_price),
        }
    }

    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    /// Seconds since the epoch as a plot coordinate.
    pub fn timestamp_secs_f64(&self) -> f64 {
        self.timestamp_ms() as f64 / 1000.0
    }
}
