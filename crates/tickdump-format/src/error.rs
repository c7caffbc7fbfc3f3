//! Formatting and parsing errors.

use thiserror::Error;

use crate::Layout;

/// Errors that can occur while writing or reading delimited text.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record did not match the layout the writer was opened with.
    #[error("Cannot write a {found} row into a {expected} layout")]
    LayoutMismatch {
        /// Layout of the open writer.
        expected: Layout,
        /// Layout of the offending record.
        found: Layout,
    },

    /// A timestamp field could not be parsed.
    #[error("Invalid timestamp '{value}' on line {line}")]
    InvalidTimestamp {
        /// 1-based line number in the input.
        line: u64,
        /// The offending field.
        value: String,
    },
}

impl From<FormatError> for std::io::Error {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::Io(io) => io,
            FormatError::Csv(csv) => csv.into(),
            other => Self::new(std::io::ErrorKind::InvalidData, other),
        }
    }
}
