//! Gap-filling tick-to-OHLC aggregation for tickdump.
//!
//! This crate provides tick-to-candle aggregation:
//!
//! - [`Candle`] - One bucket of OHLC statistics and volume sums
//! - [`Ohlc`] - Open/high/low/close derived from a price sequence
//! - [`CandleAggregator`] - Streaming aggregator with gap filling
//! - [`Record`] - Tick or candle, as handed to the row formatter
//! - [`aggregate`] - One day of ticks to records for a [`Timeframe`](tickdump_types::Timeframe)

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickdump/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod candle;
mod record;

pub use aggregator::{CandleAggregator, aggregate, aggregate_candles};
pub use candle::{Candle, Ohlc};
pub use record::Record;
