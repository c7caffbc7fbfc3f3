//! Aggregation per day and single-file CSV output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tickdump_aggregate::{Record, aggregate};
use tickdump_format::{CsvFormatter, Layout};
use tickdump_types::{Result, Tick, TickdumpError};
use tracing::{debug, info, warn};

use crate::{DailyBuffer, DumpConfig};

/// Buffers aggregated days of one symbol and writes them as one CSV file.
///
/// Nothing touches the disk until [`Dumper::dump`]; every appended day is
/// held in memory until then.
#[derive(Debug)]
pub struct Dumper {
    config: DumpConfig,
    buffer: DailyBuffer,
}

impl Dumper {
    /// Creates a dumper with an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TickdumpError::InvalidConfiguration`] if `config` is invalid.
    pub fn new(config: DumpConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            buffer: DailyBuffer::new(),
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DumpConfig {
        &self.config
    }

    /// Returns the buffered records.
    #[must_use]
    pub const fn buffer(&self) -> &DailyBuffer {
        &self.buffer
    }

    /// Aggregates one day of sorted ticks and buffers the result under `day`,
    /// replacing anything buffered for that day before.
    ///
    /// Returns the number of records buffered for the day.
    ///
    /// # Errors
    ///
    /// Returns [`TickdumpError::PreconditionViolation`] if `ticks` is not
    /// sorted. The buffer is left unchanged in that case.
    pub fn append(&mut self, day: NaiveDate, ticks: &[Tick]) -> Result<usize> {
        if !self.config.range.contains(day) {
            warn!(
                symbol = %self.config.symbol,
                %day,
                range = %self.config.range,
                "day outside requested range"
            );
        }

        let records = aggregate(
            &self.config.symbol,
            self.config.timeframe,
            self.config.price_source,
            ticks,
        )?;
        let count = records.len();

        if ticks.is_empty() {
            debug!(symbol = %self.config.symbol, %day, "no ticks for day");
        } else {
            let gaps = records.iter().filter(|r| r.is_gap()).count();
            debug!(
                symbol = %self.config.symbol,
                %day,
                ticks = ticks.len(),
                records = count,
                gaps,
                "buffered day"
            );
        }

        self.buffer.insert(day, records);
        Ok(count)
    }

    /// Writes every buffered record, days in ascending order, to
    /// [`DumpConfig::output_path`] and returns that path.
    ///
    /// # Errors
    ///
    /// Returns [`TickdumpError::FileWrite`] if the file cannot be created or
    /// written. A failed write may leave a truncated file behind.
    pub fn dump(&self) -> Result<PathBuf> {
        let path = self.config.output_path();
        let file_name = self.config.file_name();
        info!("Writing {file_name}");

        let rows = self.write_to(&path).map_err(|source| TickdumpError::FileWrite {
            path: path.clone(),
            source,
        })?;

        info!(rows, days = self.buffer.len(), "{file_name} completed");
        Ok(path)
    }

    fn write_to(&self, path: &Path) -> std::io::Result<usize> {
        let file = File::create(path)?;
        let formatter = CsvFormatter::new().with_header(self.config.include_header);
        let layout = Layout::for_timeframe(self.config.timeframe);
        let mut writer = formatter.writer(layout, BufWriter::new(file))?;

        for (day, records) in self.buffer.iter() {
            for record in records {
                writer.write(record)?;
            }
            debug!(%day, rows = records.len(), "wrote day");
        }

        let rows = writer.rows_written();
        writer.finish()?.flush()?;
        Ok(rows)
    }

    /// Consumes the dumper, returning the buffered records in output order.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.buffer.records().cloned().collect()
    }
}
