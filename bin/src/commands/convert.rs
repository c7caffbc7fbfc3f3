//! Convert command implementation.
//!
//! Reads a CSV tick log, aggregates it day by day and writes one output file.

use crate::args::{parse_date, parse_timeframe};
use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tickdump_lib::prelude::*;
use tracing::info;

/// Convert a tick log into ticks or candles.
#[allow(clippy::too_many_arguments)]
pub(crate) fn convert(
    input: &Path,
    symbol: &str,
    start_str: Option<&str>,
    end_str: Option<&str>,
    timeframe_str: &str,
    output_dir: PathBuf,
    include_header: bool,
    price_source: PriceSource,
    quiet: bool,
) -> Result<()> {
    let timeframe = parse_timeframe(timeframe_str)?;

    let ticks = read_ticks_from_path(input)
        .with_context(|| format!("Failed to read ticks from {}", input.display()))?;
    let total_ticks = ticks.len();
    let days = group_by_day(ticks);

    // Default the range to the days present in the input
    let start = match start_str {
        Some(s) => parse_date(s, "start")?,
        None => match days.keys().next() {
            Some(day) => *day,
            None => bail!("{} contains no ticks; pass --start and --end", input.display()),
        },
    };
    let end = match end_str {
        Some(s) => parse_date(s, "end")?,
        None => days.keys().next_back().copied().unwrap_or(start),
    };
    let range = DateRange::new(start, end)?;

    let skipped = days.keys().filter(|day| !range.contains(**day)).count();
    if skipped > 0 {
        info!(skipped, %range, "ignoring input days outside range");
    }

    let config = DumpConfig::new(symbol, timeframe, range, output_dir)
        .with_header(include_header)
        .with_price_source(price_source);
    let mut dumper = Dumper::new(config)?;

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(range.total_days() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} days ({percent}%) {msg}")
                .context("Invalid progress template")?
                .progress_chars("=>-"),
        );
        pb.set_message(format!("{symbol} {timeframe} {range}"));
        pb
    };

    let mut records = 0usize;
    for day in range.days() {
        let day_ticks = days.get(&day).map_or(&[][..], Vec::as_slice);
        records += dumper
            .append(day, day_ticks)
            .with_context(|| format!("Failed to aggregate {day}"))?;
        progress.inc(1);
    }
    progress.finish_with_message(format!("Aggregated {total_ticks} ticks into {records} rows"));

    let path = dumper.dump()?;

    if !quiet {
        println!("Output written to: {}", path.display());
    }

    Ok(())
}
