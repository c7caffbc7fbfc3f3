//! Row formatting and delimited text I/O for tickdump.
//!
//! This crate turns ticks and candles into delimited text rows:
//!
//! - [`Layout`] - Column set for tick or candle output
//! - [`Row`] - Column-to-value mapping for one record
//! - [`format_record`] - Formats a [`Record`](tickdump_aggregate::Record) into a [`Row`]
//! - [`CsvFormatter`] - Writes rows, with an optional header, as CSV
//! - [`read_ticks`] - Reads a CSV tick log back into [`Tick`](tickdump_types::Tick)s

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickdump/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod reader;
mod row;
mod writer;

pub use error::FormatError;
pub use reader::{group_by_day, read_ticks, read_ticks_from_path};
pub use row::{Layout, Row, format_float, format_record, stringify};
pub use writer::{CsvFormatter, RowWriter};
