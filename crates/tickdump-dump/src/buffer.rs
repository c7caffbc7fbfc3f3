//! Day-keyed record buffer.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tickdump_aggregate::Record;

/// Records of each buffered day, kept in chronological day order.
#[derive(Debug, Clone, Default)]
pub struct DailyBuffer {
    days: BTreeMap<NaiveDate, Vec<Record>>,
}

impl DailyBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    /// Stores the records of `day`, returning whatever was stored before.
    pub fn insert(&mut self, day: NaiveDate, records: Vec<Record>) -> Option<Vec<Record>> {
        self.days.insert(day, records)
    }

    /// Returns the records of `day`, if buffered.
    #[must_use]
    pub fn get(&self, day: NaiveDate) -> Option<&[Record]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    /// Iterates over buffered days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[Record])> + '_ {
        self.days.iter().map(|(day, records)| (*day, records.as_slice()))
    }

    /// Iterates over every record, days in ascending order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.days.values().flatten()
    }

    /// Returns the number of buffered days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true if no day has been buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the number of records across all days.
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}
