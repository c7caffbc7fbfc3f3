//! Per-day buffering and CSV dumping of ticks and candles.
//!
//! - [`DumpConfig`] - Symbol, timeframe, date range and output settings
//! - [`DailyBuffer`] - Records keyed by day, iterated chronologically
//! - [`Dumper`] - Aggregates each appended day and writes one CSV file

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickdump/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod buffer;
mod config;
mod dumper;

pub use buffer::DailyBuffer;
pub use config::DumpConfig;
pub use dumper::Dumper;
