//! Timeframes command implementation.

use tickdump_lib::prelude::*;

/// Print the named timeframes and their widths.
pub(crate) fn list_timeframes() {
    println!("{:<8} SECONDS", "NAME");
    for timeframe in Timeframe::all() {
        let seconds = timeframe
            .seconds()
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        println!("{:<8} {seconds}", timeframe.to_string());
    }
    println!();
    println!("Any positive number of seconds (e.g. 90 or 90s) is also accepted.");
}
