//! Tick data representation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single tick representing a price update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Timestamp of the tick (UTC).
    pub timestamp: DateTime<Utc>,
    /// Ask (offer) price.
    pub ask: f64,
    /// Bid price.
    pub bid: f64,
    /// Volume available at the ask price.
    pub ask_volume: f64,
    /// Volume available at the bid price.
    pub bid_volume: f64,
}

impl Tick {
    /// Creates a new tick.
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        ask: f64,
        bid: f64,
        ask_volume: f64,
        bid_volume: f64,
    ) -> Self {
        Self {
            timestamp,
            ask,
            bid,
            ask_volume,
            bid_volume,
        }
    }

    /// Returns the mid price (average of ask and bid).
    #[must_use]
    pub fn mid(&self) -> f64 {
        (self.ask + self.bid) / 2.0
    }

    /// Returns the price selected by `source`.
    #[must_use]
    pub fn price(&self, source: PriceSource) -> f64 {
        match source {
            PriceSource::Ask => self.ask,
            PriceSource::Bid => self.bid,
            PriceSource::Mid => self.mid(),
        }
    }

    /// Returns the timestamp as whole seconds since the Unix epoch.
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.timestamp.timestamp()
    }

    /// Returns the UTC calendar day this tick belongs to.
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Which price of a tick is folded into candle OHLC values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    /// Ask (offer) price.
    #[default]
    Ask,
    /// Bid price.
    Bid,
    /// Average of ask and bid.
    Mid,
}

impl PriceSource {
    /// Returns the price source as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ask => "ask",
            Self::Bid => "bid",
            Self::Mid => "mid",
        }
    }
}

impl std::fmt::Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
