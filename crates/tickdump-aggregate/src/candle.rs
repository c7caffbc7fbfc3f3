//! OHLC candle data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tickdump_types::BucketDuration;

/// Open, high, low and close of a price sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ohlc {
    /// First price in arrival order.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Last price in arrival order.
    pub close: f64,
}

impl Ohlc {
    /// Derives OHLC from prices collected in arrival order.
    ///
    /// An empty sequence yields all zeros, the gap-fill default.
    #[must_use]
    pub fn from_prices(prices: &[f64]) -> Self {
        let (Some(&open), Some(&close)) = (prices.first(), prices.last()) else {
            return Self::default();
        };
        let (high, low) = prices
            .iter()
            .fold((open, open), |(high, low), &p| (high.max(p), low.min(p)));
        Self {
            open,
            high,
            low,
            close,
        }
    }
}

/// One fixed-width time bucket of aggregated ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Instrument identifier.
    pub symbol: String,
    /// Bucket open time, aligned to a multiple of `duration` since the epoch.
    pub bucket_start: DateTime<Utc>,
    /// Bucket width.
    pub duration: BucketDuration,
    /// Opening price (first tick in the bucket).
    pub open: f64,
    /// Closing price (last tick in the bucket).
    pub close: f64,
    /// Highest price during the bucket.
    pub high: f64,
    /// Lowest price during the bucket.
    pub low: f64,
    /// Sum of tick ask volumes.
    pub ask_volume: f64,
    /// Sum of tick bid volumes.
    pub bid_volume: f64,
    /// Number of ticks folded into the candle, zero for gap fills.
    pub tick_count: u32,
}

impl Candle {
    /// Creates a candle from the prices and volume sums of one bucket.
    #[must_use]
    pub fn from_prices(
        symbol: impl Into<String>,
        bucket_start: DateTime<Utc>,
        duration: BucketDuration,
        prices: &[f64],
        ask_volume: f64,
        bid_volume: f64,
    ) -> Self {
        let ohlc = Ohlc::from_prices(prices);
        Self {
            symbol: symbol.into(),
            bucket_start,
            duration,
            open: ohlc.open,
            close: ohlc.close,
            high: ohlc.high,
            low: ohlc.low,
            ask_volume,
            bid_volume,
            tick_count: u32::try_from(prices.len()).unwrap_or(u32::MAX),
        }
    }

    /// Creates a zeroed candle for a bucket that received no ticks.
    #[must_use]
    pub fn gap(
        symbol: impl Into<String>,
        bucket_start: DateTime<Utc>,
        duration: BucketDuration,
    ) -> Self {
        Self::from_prices(symbol, bucket_start, duration, &[], 0.0, 0.0)
    }

    /// Returns true if no ticks fell into this bucket.
    #[must_use]
    pub const fn is_gap(&self) -> bool {
        self.tick_count == 0
    }

    /// Returns the OHLC values of this candle.
    #[must_use]
    pub const fn ohlc(&self) -> Ohlc {
        Ohlc {
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
        }
    }
}
