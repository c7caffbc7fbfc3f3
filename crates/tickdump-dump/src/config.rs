//! Dump job configuration.

use std::path::PathBuf;

use chrono::Datelike;
use tickdump_types::{DateRange, PriceSource, Result, TickdumpError, Timeframe};

/// Settings of one symbol/timeframe/date-range dump.
#[derive(Debug, Clone, PartialEq)]
pub struct DumpConfig {
    /// Instrument identifier, embedded in the output file name.
    pub symbol: String,
    /// Tick passthrough or candle width.
    pub timeframe: Timeframe,
    /// Requested days, embedded in the output file name.
    pub range: DateRange,
    /// Directory the output file is written into.
    pub folder: PathBuf,
    /// Whether the first row names the columns.
    pub include_header: bool,
    /// Tick price folded into candles.
    pub price_source: PriceSource,
}

impl DumpConfig {
    /// Creates a configuration without a header row, aggregating ask prices.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        timeframe: Timeframe,
        range: DateRange,
        folder: impl Into<PathBuf>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe,
            range,
            folder: folder.into(),
            include_header: false,
            price_source: PriceSource::default(),
        }
    }

    /// Sets whether to write a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Sets which tick price is folded into candles.
    #[must_use]
    pub const fn with_price_source(mut self, price_source: PriceSource) -> Self {
        self.price_source = price_source;
        self
    }

    /// Checks that the configuration can produce an output file.
    ///
    /// # Errors
    ///
    /// Returns [`TickdumpError::InvalidConfiguration`] if the symbol is empty
    /// or cannot be part of a file name.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(TickdumpError::InvalidConfiguration(
                "symbol must not be empty".to_string(),
            ));
        }
        if self.symbol.contains(['/', '\\']) {
            return Err(TickdumpError::InvalidConfiguration(format!(
                "symbol '{}' must not contain path separators",
                self.symbol
            )));
        }
        Ok(())
    }

    /// Returns `<symbol>-<YYYY>_<MM>_<DD>-<YYYY>_<MM>_<DD>.csv` for the range.
    #[must_use]
    pub fn file_name(&self) -> String {
        let DateRange { start, end } = self.range;
        format!(
            "{}-{}_{:02}_{:02}-{}_{:02}_{:02}.csv",
            self.symbol,
            start.year(),
            start.month(),
            start.day(),
            end.year(),
            end.month(),
            end.day()
        )
    }

    /// Returns the full output path.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.folder.join(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_file_name() {
        let config = DumpConfig::new("EURUSD", Timeframe::MINUTE_1, range(), "/data");

        assert_eq!(config.file_name(), "EURUSD-2024_03_01-2024_12_31.csv");
        assert_eq!(
            config.output_path(),
            PathBuf::from("/data/EURUSD-2024_03_01-2024_12_31.csv")
        );
    }

    #[test]
    fn test_defaults() {
        let config = DumpConfig::new("EURUSD", Timeframe::Tick, range(), ".");

        assert!(!config.include_header);
        assert_eq!(config.price_source, PriceSource::Ask);
        assert!(config.with_header(true).include_header);
    }

    #[test]
    fn test_validate_symbol() {
        assert!(DumpConfig::new("EURUSD", Timeframe::Tick, range(), ".").validate().is_ok());
        assert!(matches!(
            DumpConfig::new("  ", Timeframe::Tick, range(), ".").validate(),
            Err(TickdumpError::InvalidConfiguration(_))
        ));
        assert!(DumpConfig::new("a/b", Timeframe::Tick, range(), ".").validate().is_err());
    }
}
