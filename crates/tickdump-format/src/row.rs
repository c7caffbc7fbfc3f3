//! Field mapping for tick and candle rows.

use chrono::{DateTime, Utc};
use tickdump_aggregate::{Candle, Record};
use tickdump_types::{Tick, Timeframe};

/// Column set of an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Raw tick rows.
    Tick,
    /// Aggregated candle rows.
    Candle,
}

impl Layout {
    const TICK_COLUMNS: [&'static str; 5] = ["time", "ask", "bid", "ask_volume", "bid_volume"];
    const CANDLE_COLUMNS: [&'static str; 7] = [
        "time",
        "open",
        "close",
        "high",
        "low",
        "ask_volume",
        "bid_volume",
    ];

    /// Returns the layout produced by a timeframe.
    #[must_use]
    pub const fn for_timeframe(timeframe: Timeframe) -> Self {
        match timeframe {
            Timeframe::Tick => Self::Tick,
            Timeframe::Bucket(_) => Self::Candle,
        }
    }

    /// Returns the column names, in output order.
    #[must_use]
    pub const fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Tick => &Self::TICK_COLUMNS,
            Self::Candle => &Self::CANDLE_COLUMNS,
        }
    }

    /// Returns the layout as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tick => "tick",
            Self::Candle => "candle",
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One formatted output row: a value per column of its [`Layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    layout: Layout,
    values: Vec<String>,
}

impl Row {
    /// Returns the layout this row was formatted for.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the value of `column`, if the layout has it.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.layout
            .columns()
            .iter()
            .position(|c| *c == column)
            .map(|i| self.values[i].as_str())
    }

    /// Returns the values in column order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Iterates over `(column, value)` pairs in column order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.layout
            .columns()
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }
}

/// Formats a float with fixed 5-decimal precision.
#[must_use]
pub fn format_float(value: f64) -> String {
    format!("{value:.5}")
}

/// Renders a bucket start the way candle rows show time.
#[must_use]
pub fn stringify(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Renders a tick timestamp with milliseconds, widened to microseconds or
/// nanoseconds when the tick carries finer precision.
fn tick_time(timestamp: DateTime<Utc>) -> String {
    let nanos = timestamp.timestamp_subsec_nanos();
    let fraction = if nanos % 1_000_000 == 0 {
        "%.3f"
    } else if nanos % 1_000 == 0 {
        "%.6f"
    } else {
        "%.9f"
    };
    timestamp
        .format(&format!("%Y-%m-%d %H:%M:%S{fraction}"))
        .to_string()
}

/// Formats a record into a row of its own layout.
///
/// Rows are never reordered or rejected; non-finite values are written as
/// Rust formats them.
#[must_use]
pub fn format_record(record: &Record) -> Row {
    match record {
        Record::Tick(tick) => format_tick(tick),
        Record::Candle(candle) => format_candle(candle),
    }
}

fn format_tick(tick: &Tick) -> Row {
    Row {
        layout: Layout::Tick,
        values: vec![
            tick_time(tick.timestamp),
            format_float(tick.ask),
            format_float(tick.bid),
            format_float(tick.ask_volume),
            format_float(tick.bid_volume),
        ],
    }
}

fn format_candle(candle: &Candle) -> Row {
    Row {
        layout: Layout::Candle,
        values: vec![
            stringify(candle.bucket_start),
            format_float(candle.open),
            format_float(candle.close),
            format_float(candle.high),
            format_float(candle.low),
            format_float(candle.ask_volume),
            format_float(candle.bid_volume),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{TimeDelta, TimeZone};
    use tickdump_types::BucketDuration;

    fn create_test_tick() -> Tick {
        let timestamp =
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap() + TimeDelta::milliseconds(120);
        Tick::new(timestamp, 1.1001, 1.1, 100.0, 200.25)
    }

    fn create_test_candle() -> Candle {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap();
        Candle::from_prices(
            "eurusd",
            start,
            BucketDuration::new(60).unwrap(),
            &[1.123456, 1.2, 1.05, 1.1],
            12.5,
            0.000004,
        )
    }

    #[test]
    fn test_tick_row() {
        let row = format_record(&Record::Tick(create_test_tick()));

        assert_eq!(row.layout(), Layout::Tick);
        assert_eq!(
            row.values(),
            [
                "2024-01-15 12:30:45.120",
                "1.10010",
                "1.10000",
                "100.00000",
                "200.25000"
            ]
        );
    }

    #[test]
    fn test_candle_row() {
        let row = format_record(&Record::Candle(create_test_candle()));

        assert_eq!(row.get("time"), Some("2024-01-15 12:30:00"));
        assert_eq!(row.get("open"), Some("1.12346"));
        assert_eq!(row.get("close"), Some("1.10000"));
        assert_eq!(row.get("high"), Some("1.20000"));
        assert_eq!(row.get("low"), Some("1.05000"));
        assert_eq!(row.get("ask_volume"), Some("12.50000"));
        assert_eq!(row.get("bid_volume"), Some("0.00000"));
        assert_eq!(row.get("ask"), None);
    }

    #[test]
    fn test_columns_in_order() {
        let row = format_record(&Record::Candle(create_test_candle()));
        let columns: Vec<_> = row.fields().map(|(c, _)| c).collect();

        assert_eq!(
            columns,
            ["time", "open", "close", "high", "low", "ask_volume", "bid_volume"]
        );
        assert_eq!(
            Layout::Tick.columns(),
            ["time", "ask", "bid", "ask_volume", "bid_volume"]
        );
    }

    #[test]
    fn test_gap_candle_row_is_zero() {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 12, 31, 0).unwrap();
        let gap = Candle::gap("eurusd", start, BucketDuration::new(60).unwrap());
        let row = format_record(&Record::Candle(gap));

        assert!(row.values()[1..].iter().all(|v| v == "0.00000"));
    }

    #[test]
    fn test_format_float_never_uses_exponent() {
        assert_eq!(format_float(1e-7), "0.00000");
        assert_eq!(format_float(123_456_789.0), "123456789.00000");
        assert_eq!(format_float(-0.5), "-0.50000");
    }

    #[test]
    fn test_candle_values_survive_parse() {
        let candle = create_test_candle();
        let row = format_record(&Record::Candle(candle.clone()));
        let parsed: Vec<f64> = row.values()[1..]
            .iter()
            .map(|v| v.parse().unwrap())
            .collect();
        let original = [
            candle.open,
            candle.close,
            candle.high,
            candle.low,
            candle.ask_volume,
            candle.bid_volume,
        ];

        for (value, expected) in parsed.iter().zip(original) {
            assert_abs_diff_eq!(*value, expected, epsilon = 5e-6);
        }
    }

    #[test]
    fn test_tick_time_keeps_sub_millisecond_precision() {
        let second = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

        assert_eq!(tick_time(second), "2024-03-01 09:00:00.000");
        assert_eq!(
            tick_time(second + TimeDelta::microseconds(123_456)),
            "2024-03-01 09:00:00.123456"
        );
        assert_eq!(
            tick_time(second + TimeDelta::nanoseconds(123_456_789)),
            "2024-03-01 09:00:00.123456789"
        );
    }

    #[test]
    fn test_layout_for_timeframe() {
        assert_eq!(Layout::for_timeframe(Timeframe::Tick), Layout::Tick);
        assert_eq!(Layout::for_timeframe(Timeframe::HOUR_1), Layout::Candle);
    }
}
