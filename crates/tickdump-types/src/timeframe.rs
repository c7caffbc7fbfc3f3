//! Aggregation timeframe definitions.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;

use crate::TickdumpError;

/// Width of one aggregation bucket, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketDuration(NonZeroU32);

impl BucketDuration {
    /// Creates a bucket duration, or `None` for zero seconds.
    #[must_use]
    pub const fn new(seconds: u32) -> Option<Self> {
        match NonZeroU32::new(seconds) {
            Some(secs) => Some(Self(secs)),
            None => None,
        }
    }

    /// Returns the width in seconds.
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.0.get()
    }

    /// Returns the width in seconds as `i64`, for epoch arithmetic.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0.get() as i64
    }
}

impl std::fmt::Display for BucketDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s", self.0)
    }
}

const fn bucket(seconds: u32) -> Timeframe {
    match BucketDuration::new(seconds) {
        Some(duration) => Timeframe::Bucket(duration),
        None => panic!("bucket duration must be non-zero"),
    }
}

/// Aggregation timeframe: tick passthrough or fixed-width buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// Tick-by-tick (no aggregation).
    #[default]
    Tick,
    /// Candles over buckets of the given width.
    Bucket(BucketDuration),
}

impl Timeframe {
    /// 1-second bars.
    pub const SECOND_1: Self = bucket(1);
    /// 1-minute bars.
    pub const MINUTE_1: Self = bucket(60);
    /// 5-minute bars.
    pub const MINUTE_5: Self = bucket(300);
    /// 15-minute bars.
    pub const MINUTE_15: Self = bucket(900);
    /// 30-minute bars.
    pub const MINUTE_30: Self = bucket(1800);
    /// 1-hour bars.
    pub const HOUR_1: Self = bucket(3600);
    /// 4-hour bars.
    pub const HOUR_4: Self = bucket(14400);
    /// Daily bars.
    pub const DAY_1: Self = bucket(86400);

    /// Builds a timeframe from a raw second count.
    ///
    /// Zero is the tick passthrough sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`TickdumpError::InvalidConfiguration`] for negative values or
    /// values that do not fit a `u32`.
    pub fn from_seconds(seconds: i64) -> Result<Self, TickdumpError> {
        let secs = u32::try_from(seconds).map_err(|_| {
            TickdumpError::InvalidConfiguration(format!(
                "bucket duration must be a positive number of seconds, got {seconds}"
            ))
        })?;
        Ok(BucketDuration::new(secs).map_or(Self::Tick, Self::Bucket))
    }

    /// Returns the duration in seconds, or None for tick data.
    #[must_use]
    pub const fn seconds(&self) -> Option<u32> {
        match self {
            Self::Tick => None,
            Self::Bucket(duration) => Some(duration.seconds()),
        }
    }

    /// Returns the short identifier of a named timeframe.
    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        match self.seconds() {
            None => Some("tick"),
            Some(1) => Some("s1"),
            Some(60) => Some("m1"),
            Some(300) => Some("m5"),
            Some(900) => Some("m15"),
            Some(1800) => Some("m30"),
            Some(3600) => Some("h1"),
            Some(14400) => Some("h4"),
            Some(86400) => Some("d1"),
            Some(_) => None,
        }
    }

    /// Returns all named timeframes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Tick,
            Self::SECOND_1,
            Self::MINUTE_1,
            Self::MINUTE_5,
            Self::MINUTE_15,
            Self::MINUTE_30,
            Self::HOUR_1,
            Self::HOUR_4,
            Self::DAY_1,
        ]
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.name(), self) {
            (Some(name), _) => write!(f, "{name}"),
            (None, Self::Bucket(duration)) => write!(f, "{duration}"),
            (None, Self::Tick) => write!(f, "tick"),
        }
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tick" | "0" => Ok(Self::Tick),
            "s1" | "1s" | "second" | "second1" => Ok(Self::SECOND_1),
            "m1" | "1m" | "minute" | "minute1" => Ok(Self::MINUTE_1),
            "m5" | "5m" | "minute5" => Ok(Self::MINUTE_5),
            "m15" | "15m" | "minute15" => Ok(Self::MINUTE_15),
            "m30" | "30m" | "minute30" => Ok(Self::MINUTE_30),
            "h1" | "1h" | "hour" | "hour1" => Ok(Self::HOUR_1),
            "h4" | "4h" | "hour4" => Ok(Self::HOUR_4),
            "d1" | "1d" | "day" | "day1" | "daily" => Ok(Self::DAY_1),
            other => {
                // Plain second counts, optionally suffixed with "s".
                let digits = other.strip_suffix('s').unwrap_or(other);
                digits
                    .parse::<u32>()
                    .ok()
                    .and_then(BucketDuration::new)
                    .map(Self::Bucket)
                    .ok_or_else(|| TimeframeParseError(s.to_string()))
            }
        }
    }
}

/// Error returned when parsing an invalid timeframe string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "invalid timeframe '{0}', expected one of: tick, s1, m1, m5, m15, m30, h1, h4, d1, or a positive number of seconds"
)]
pub struct TimeframeParseError(String);
