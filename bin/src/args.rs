//! Argument parsing helpers for the tickdump CLI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use tickdump_lib::prelude::*;

/// Price folded into candles, as accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum PriceArg {
    Ask,
    Bid,
    Mid,
}

impl From<PriceArg> for PriceSource {
    fn from(arg: PriceArg) -> Self {
        match arg {
            PriceArg::Ask => Self::Ask,
            PriceArg::Bid => Self::Bid,
            PriceArg::Mid => Self::Mid,
        }
    }
}

/// Parse a YYYY-MM-DD date, naming `what` in the error.
pub(crate) fn parse_date(value: &str, what: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid {what} date: {value}"))
}

/// Parse a timeframe name or second count.
pub(crate) fn parse_timeframe(value: &str) -> Result<Timeframe> {
    value
        .parse::<Timeframe>()
        .map_err(|e| anyhow::anyhow!("{e}"))
}
