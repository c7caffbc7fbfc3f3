//! Benchmark fixtures for tickdump.

use chrono::{NaiveDate, TimeDelta};
use tickdump_lib::Tick;

/// Day all synthetic ticks fall on.
#[must_use]
pub fn bench_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap_or_default()
}

/// Generates `count` sorted ticks spread evenly over [`bench_day`].
///
/// Prices follow a deterministic zig-zag around 1.1 so candles get distinct
/// highs and lows without pulling in a random number generator.
#[must_use]
pub fn synthetic_ticks(count: usize) -> Vec<Tick> {
    let start = bench_day().and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
    let step_ms = 86_400_000 / count.max(1) as i64;

    (0..count)
        .map(|i| {
            let offset = (i % 40) as f64 - 20.0;
            let ask = 1.1 + offset.abs() * 0.00001;
            Tick::new(
                start + TimeDelta::milliseconds(step_ms * i as i64),
                ask,
                ask - 0.00002,
                1.0 + (i % 7) as f64,
                1.0 + (i % 5) as f64,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_ticks_sorted_within_day() {
        let ticks = synthetic_ticks(1_000);

        assert_eq!(ticks.len(), 1_000);
        assert!(ticks.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert!(ticks.iter().all(|t| t.day() == bench_day()));
    }
}
