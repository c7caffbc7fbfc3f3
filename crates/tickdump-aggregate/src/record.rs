//! Output records: raw ticks or aggregated candles.

use chrono::{DateTime, Utc};
use tickdump_types::Tick;

use crate::Candle;

/// One output row's worth of data.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// A tick passed through without aggregation.
    Tick(Tick),
    /// An aggregated (or gap-filled) candle.
    Candle(Candle),
}

impl Record {
    /// Returns the tick timestamp or candle bucket start.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Tick(tick) => tick.timestamp,
            Self::Candle(candle) => candle.bucket_start,
        }
    }

    /// Returns true if this is a zero-filled candle.
    #[must_use]
    pub const fn is_gap(&self) -> bool {
        matches!(self, Self::Candle(candle) if candle.is_gap())
    }
}

impl From<Tick> for Record {
    fn from(tick: Tick) -> Self {
        Self::Tick(tick)
    }
}

impl From<Candle> for Record {
    fn from(candle: Candle) -> Self {
        Self::Candle(candle)
    }
}
