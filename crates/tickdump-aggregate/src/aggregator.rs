//! Gap-filling tick-to-candle aggregation.

use chrono::{DateTime, Utc};
use tickdump_types::{BucketDuration, PriceSource, Result, Tick, TickdumpError, Timeframe};
use tracing::trace;

use crate::{Candle, Record};

/// Streaming tick aggregator.
///
/// Folds ticks into candles on an epoch-aligned grid of `duration`-wide
/// buckets. Buckets skipped between two ticks are emitted as zeroed gap
/// candles so the grid stays contiguous.
#[derive(Debug)]
pub struct CandleAggregator {
    symbol: String,
    duration: BucketDuration,
    price_source: PriceSource,
    current: Option<OpenBucket>,
    last_timestamp: Option<DateTime<Utc>>,
}

/// State of the bucket still receiving ticks.
#[derive(Debug)]
struct OpenBucket {
    key: i64,
    prices: Vec<f64>,
    ask_volume: f64,
    bid_volume: f64,
}

impl CandleAggregator {
    /// Creates a new aggregator for the given symbol and bucket width.
    #[must_use]
    pub fn new(symbol: impl Into<String>, duration: BucketDuration) -> Self {
        Self {
            symbol: symbol.into(),
            duration,
            price_source: PriceSource::default(),
            current: None,
            last_timestamp: None,
        }
    }

    /// Sets which tick price is folded into OHLC values.
    #[must_use]
    pub const fn with_price_source(mut self, price_source: PriceSource) -> Self {
        self.price_source = price_source;
        self
    }

    /// Returns the bucket key (epoch seconds of the bucket start) for a tick.
    #[must_use]
    pub fn bucket_key(&self, tick: &Tick) -> i64 {
        let secs = tick.epoch_seconds();
        secs - secs.rem_euclid(self.duration.as_i64())
    }

    /// Processes a tick, pushing every candle it completes onto `out`.
    ///
    /// Crossing one bucket boundary completes one candle; crossing several
    /// also emits a gap candle for each bucket in between.
    ///
    /// # Errors
    ///
    /// Returns [`TickdumpError::PreconditionViolation`] if the tick is older
    /// than the previous one. Nothing is emitted in that case.
    pub fn process(&mut self, tick: &Tick, out: &mut Vec<Candle>) -> Result<()> {
        if let Some(previous) = self.last_timestamp
            && tick.timestamp < previous
        {
            return Err(TickdumpError::PreconditionViolation {
                previous,
                current: tick.timestamp,
            });
        }
        self.last_timestamp = Some(tick.timestamp);

        let key = self.bucket_key(tick);
        let bucket = match self.current.take() {
            Some(bucket) if bucket.key == key => bucket,
            Some(bucket) => {
                let slots = (key - bucket.key) / self.duration.as_i64();
                out.push(self.close(&bucket)?);
                if slots > 1 {
                    trace!(symbol = %self.symbol, from = bucket.key, slots = slots - 1, "filling gap");
                }
                for slot in 1..slots {
                    let start = bucket_time(bucket.key + slot * self.duration.as_i64())?;
                    out.push(Candle::gap(self.symbol.as_str(), start, self.duration));
                }
                OpenBucket::reset(bucket, key)
            }
            None => OpenBucket::new(key),
        };

        self.current = Some(bucket.push(tick, self.price_source));
        Ok(())
    }

    /// Finishes aggregation, returning the candle of the still-open bucket.
    ///
    /// # Errors
    ///
    /// Returns an error if the bucket start cannot be represented.
    pub fn finish(self) -> Result<Option<Candle>> {
        self.current
            .as_ref()
            .map(|bucket| self.close(bucket))
            .transpose()
    }

    fn close(&self, bucket: &OpenBucket) -> Result<Candle> {
        Ok(Candle::from_prices(
            self.symbol.as_str(),
            bucket_time(bucket.key)?,
            self.duration,
            &bucket.prices,
            bucket.ask_volume,
            bucket.bid_volume,
        ))
    }
}

impl OpenBucket {
    const fn new(key: i64) -> Self {
        Self {
            key,
            prices: Vec::new(),
            ask_volume: 0.0,
            bid_volume: 0.0,
        }
    }

    /// Reuses the price buffer of a closed bucket for the next one.
    fn reset(mut bucket: Self, key: i64) -> Self {
        bucket.prices.clear();
        Self {
            key,
            prices: bucket.prices,
            ask_volume: 0.0,
            bid_volume: 0.0,
        }
    }

    fn push(mut self, tick: &Tick, source: PriceSource) -> Self {
        self.prices.push(tick.price(source));
        self.ask_volume += tick.ask_volume;
        self.bid_volume += tick.bid_volume;
        self
    }
}

fn bucket_time(key: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(key, 0).ok_or(TickdumpError::TimestampOutOfRange(key))
}

fn check_order(ticks: &[Tick]) -> Result<()> {
    match ticks
        .windows(2)
        .find(|pair| pair[1].timestamp < pair[0].timestamp)
    {
        Some(pair) => Err(TickdumpError::PreconditionViolation {
            previous: pair[0].timestamp,
            current: pair[1].timestamp,
        }),
        None => Ok(()),
    }
}

/// Aggregates one day of sorted ticks into a contiguous run of candles.
///
/// A day without ticks yields no candles.
///
/// # Errors
///
/// Returns [`TickdumpError::PreconditionViolation`] if `ticks` is not sorted
/// ascending by timestamp.
pub fn aggregate_candles(
    symbol: &str,
    duration: BucketDuration,
    price_source: PriceSource,
    ticks: &[Tick],
) -> Result<Vec<Candle>> {
    let mut aggregator = CandleAggregator::new(symbol, duration).with_price_source(price_source);
    let mut candles = Vec::new();

    for tick in ticks {
        aggregator.process(tick, &mut candles)?;
    }

    if let Some(candle) = aggregator.finish()? {
        candles.push(candle);
    }

    Ok(candles)
}

/// Aggregates one day of ticks according to `timeframe`.
///
/// [`Timeframe::Tick`] passes the ticks through unchanged.
///
/// # Errors
///
/// Returns [`TickdumpError::PreconditionViolation`] if `ticks` is not sorted
/// ascending by timestamp.
pub fn aggregate(
    symbol: &str,
    timeframe: Timeframe,
    price_source: PriceSource,
    ticks: &[Tick],
) -> Result<Vec<Record>> {
    match timeframe {
        Timeframe::Tick => {
            check_order(ticks)?;
            Ok(ticks.iter().copied().map(Record::Tick).collect())
        }
        Timeframe::Bucket(duration) => Ok(aggregate_candles(symbol, duration, price_source, ticks)?
            .into_iter()
            .map(Record::Candle)
            .collect()),
    }
}
