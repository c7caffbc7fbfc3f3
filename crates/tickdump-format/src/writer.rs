//! CSV output format.

use std::io::Write;

use tickdump_aggregate::Record;

use crate::{FormatError, Layout, format_record};

/// CSV formatter.
#[derive(Debug, Clone, Copy)]
pub struct CsvFormatter {
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter: comma-delimited, no header.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_header: false,
        }
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Opens a row writer over `writer`, emitting the header row if enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn writer<W: Write>(&self, layout: Layout, writer: W) -> Result<RowWriter<W>, FormatError> {
        let mut inner = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        if self.include_header {
            inner.write_record(layout.columns())?;
        }

        Ok(RowWriter {
            inner,
            layout,
            rows: 0,
        })
    }

    /// Writes every record in order, returning the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or a record does not match `layout`.
    pub fn write_records<'a, W: Write>(
        &self,
        layout: Layout,
        records: impl IntoIterator<Item = &'a Record>,
        writer: W,
    ) -> Result<usize, FormatError> {
        let mut rows = self.writer(layout, writer)?;
        for record in records {
            rows.write(record)?;
        }
        let written = rows.rows_written();
        rows.finish()?;
        Ok(written)
    }
}

/// Streams formatted records of one [`Layout`] into a CSV sink.
#[derive(Debug)]
pub struct RowWriter<W: Write> {
    inner: csv::Writer<W>,
    layout: Layout,
    rows: usize,
}

impl<W: Write> RowWriter<W> {
    /// Formats and writes one record.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or the record's layout differs from
    /// the writer's.
    pub fn write(&mut self, record: &Record) -> Result<(), FormatError> {
        let row = format_record(record);
        if row.layout() != self.layout {
            return Err(FormatError::LayoutMismatch {
                expected: self.layout,
                found: row.layout(),
            });
        }
        self.inner.write_record(row.values())?;
        self.rows += 1;
        Ok(())
    }

    /// Returns the number of data rows written so far.
    #[must_use]
    pub const fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flushes buffered rows and returns the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    pub fn finish(self) -> Result<W, FormatError> {
        self.inner
            .into_inner()
            .map_err(|err| FormatError::Io(err.into_error()))
    }
}
