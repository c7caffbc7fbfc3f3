//! Core types for the tickdump tick-to-candle converter.
//!
//! This crate provides the fundamental data structures used throughout tickdump:
//!
//! - [`Tick`] - A single price tick with timestamp, ask, bid, and volumes
//! - [`PriceSource`] - Which side of a tick is folded into candles
//! - [`Timeframe`] - Tick passthrough or a fixed [`BucketDuration`]
//! - [`DateRange`] - Inclusive range of calendar days
//! - [`TickdumpError`] - Error type shared by the workspace

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickdump/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod tick;
mod timeframe;

pub use date_range::{DateRange, DayIterator};
pub use error::{DateRangeError, Result, TickdumpError};
pub use tick::{PriceSource, Tick};
pub use timeframe::{BucketDuration, Timeframe, TimeframeParseError};
