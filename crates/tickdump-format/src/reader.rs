//! Reading CSV tick logs.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use tickdump_types::Tick;

use crate::FormatError;

/// One line of a tick log, before timestamp parsing.
#[derive(Debug, Deserialize)]
struct TickLine {
    time: String,
    ask: f64,
    bid: f64,
    ask_volume: f64,
    bid_volume: f64,
}

/// Reads ticks from CSV with columns `time,ask,bid,ask_volume,bid_volume`.
///
/// The header row is optional. Timestamps may be `YYYY-MM-DD HH:MM:SS[.fff]`
/// (taken as UTC) or RFC 3339. Ticks are returned in file order.
///
/// # Errors
///
/// Returns an error on malformed rows or unparseable timestamps.
pub fn read_ticks<R: Read>(reader: R) -> Result<Vec<Tick>, FormatError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut ticks = Vec::new();
    for (index, result) in csv.records().enumerate() {
        let record = result?;
        let is_header = record
            .get(0)
            .is_some_and(|field| field.eq_ignore_ascii_case("time"));
        if index == 0 && is_header {
            continue;
        }

        let line: TickLine = record.deserialize(None)?;
        let line_number = record.position().map_or(index as u64 + 1, |p| p.line());
        let timestamp =
            parse_timestamp(&line.time).ok_or_else(|| FormatError::InvalidTimestamp {
                line: line_number,
                value: line.time.clone(),
            })?;

        ticks.push(Tick::new(
            timestamp,
            line.ask,
            line.bid,
            line.ask_volume,
            line.bid_volume,
        ));
    }

    Ok(ticks)
}

/// Reads ticks from a CSV file. See [`read_ticks`].
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn read_ticks_from_path(path: impl AsRef<Path>) -> Result<Vec<Tick>, FormatError> {
    let file = std::fs::File::open(path)?;
    read_ticks(std::io::BufReader::new(file))
}

/// Splits ticks into per-day sequences keyed by UTC calendar day.
///
/// Tick order within a day is preserved.
#[must_use]
pub fn group_by_day(ticks: impl IntoIterator<Item = Tick>) -> BTreeMap<NaiveDate, Vec<Tick>> {
    let mut days: BTreeMap<NaiveDate, Vec<Tick>> = BTreeMap::new();
    for tick in ticks {
        days.entry(tick.day()).or_default().push(tick);
    }
    days
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_read_with_header() {
        let input = "time,ask,bid,ask_volume,bid_volume\n\
                     2024-03-01 09:00:00.250,1.10010,1.10000,1.5,2.25\n\
                     2024-03-01 09:00:01,1.10020,1.10010,0.75,1\n";
        let ticks = read_ticks(input.as_bytes()).unwrap();

        assert_eq!(ticks.len(), 2);
        assert_eq!(
            ticks[0].timestamp,
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + chrono::TimeDelta::milliseconds(250)
        );
        assert_relative_eq!(ticks[0].ask, 1.1001);
        assert_relative_eq!(ticks[0].bid_volume, 2.25);
        assert_eq!(ticks[1].timestamp.second(), 1);
    }

    #[test]
    fn test_header_match_ignores_case() {
        let input = "Time,Ask,Bid,AskVolume,BidVolume\n\
                     2024-03-01 09:00:00,1.2,1.1,0,0\n";
        let ticks = read_ticks(input.as_bytes()).unwrap();

        assert_eq!(ticks.len(), 1);
        assert_relative_eq!(ticks[0].ask, 1.2);
    }

    #[test]
    fn test_read_without_header_rfc3339() {
        let input = "2024-03-01T09:00:00Z,1.2,1.1,0,0\n";
        let ticks = read_ticks(input.as_bytes()).unwrap();

        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].timestamp.hour(), 9);
    }

    #[test]
    fn test_invalid_timestamp_reports_line() {
        let input = "time,ask,bid,ask_volume,bid_volume\n\
                     2024-03-01 09:00:00,1.2,1.1,0,0\n\
                     yesterday,1.2,1.1,0,0\n";
        let err = read_ticks(input.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            FormatError::InvalidTimestamp { line: 3, ref value } if value == "yesterday"
        ));
    }

    #[test]
    fn test_invalid_number_is_csv_error() {
        let input = "2024-03-01 09:00:00,abc,1.1,0,0\n";
        assert!(matches!(
            read_ticks(input.as_bytes()),
            Err(FormatError::Csv(_))
        ));
    }

    #[test]
    fn test_group_by_day() {
        let at = |d, h| Tick::new(Utc.with_ymd_and_hms(2024, 3, d, h, 0, 0).unwrap(), 1.0, 1.0, 0.0, 0.0);
        let days = group_by_day(vec![at(2, 1), at(1, 5), at(2, 3), at(3, 0)]);
        let keys: Vec<_> = days.keys().map(|d| d.to_string()).collect();

        assert_eq!(keys, ["2024-03-01", "2024-03-02", "2024-03-03"]);
        let second: Vec<_> = days[&NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()]
            .iter()
            .map(|t| t.timestamp.hour())
            .collect();
        assert_eq!(second, [1, 3]);
    }
}
