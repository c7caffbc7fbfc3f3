//! Error types for tickdump.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::TimeframeParseError;

/// Result type alias for tickdump operations.
pub type Result<T> = std::result::Result<T, TickdumpError>;

/// Errors that can occur while aggregating and dumping tick data.
#[derive(Error, Debug)]
pub enum TickdumpError {
    /// A dump was configured with values that cannot produce valid output.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Ticks were not sorted ascending by timestamp.
    #[error("Ticks out of order: {current} arrived after {previous}")]
    PreconditionViolation {
        /// Timestamp of the tick preceding the offending one.
        previous: DateTime<Utc>,
        /// Timestamp of the offending tick.
        current: DateTime<Utc>,
    },

    /// A bucket boundary falls outside the representable time range.
    #[error("Bucket start {0} is outside the supported time range")]
    TimestampOutOfRange(i64),

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// Invalid timeframe string.
    #[error(transparent)]
    Timeframe(#[from] TimeframeParseError),

    /// Writing the output file failed. The file may be partially written.
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        /// Target path of the failed write.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}
