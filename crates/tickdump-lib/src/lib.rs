//! Convert Dukascopy-style tick streams into gap-filled OHLC candles.
//!
//! This is a facade crate that re-exports functionality from the tickdump
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use tickdump_lib::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//!     let ticks = read_ticks_from_path("eurusd-ticks.csv")?;
//!
//!     let config = DumpConfig::new("EURUSD", Timeframe::MINUTE_1, DateRange::single_day(day), ".")
//!         .with_header(true);
//!     let mut dumper = Dumper::new(config)?;
//!     dumper.append(day, &ticks)?;
//!     println!("Wrote {}", dumper.dump()?.display());
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickdump/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tickdump_types::*;

// Re-export aggregation
#[cfg(feature = "aggregate")]
pub use tickdump_aggregate::{Candle, CandleAggregator, Ohlc, Record, aggregate, aggregate_candles};

// Re-export formatting
#[cfg(feature = "format")]
pub use tickdump_format::{
    CsvFormatter, FormatError, Layout, Row, RowWriter, format_float, format_record, group_by_day,
    read_ticks, read_ticks_from_path, stringify,
};

// Re-export dumping
#[cfg(feature = "dump")]
pub use tickdump_dump::{DailyBuffer, DumpConfig, Dumper};

/// Prelude module for convenient imports.
///
/// ```
/// use tickdump_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tickdump_types::{
        BucketDuration, DateRange, DateRangeError, PriceSource, Result, Tick, TickdumpError,
        Timeframe,
    };

    #[cfg(feature = "aggregate")]
    pub use tickdump_aggregate::{Candle, CandleAggregator, Record, aggregate};

    #[cfg(feature = "format")]
    pub use tickdump_format::{
        CsvFormatter, FormatError, Layout, format_record, group_by_day, read_ticks,
        read_ticks_from_path,
    };

    #[cfg(feature = "dump")]
    pub use tickdump_dump::{DumpConfig, Dumper};
}
