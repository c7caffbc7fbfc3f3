//! tickdump CLI - Convert tick logs into gap-filled OHLC candles.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod args;
mod commands;
mod logging;

use args::PriceArg;

#[derive(Parser)]
#[command(name = "tickdump")]
#[command(about = "Convert tick logs into gap-filled OHLC candles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a CSV tick log into a tick or candle CSV
    Convert {
        /// Tick log with columns time,ask,bid,ask_volume,bid_volume
        input: PathBuf,

        /// Instrument identifier embedded in the output file name
        #[arg(short = 'S', long)]
        symbol: String,

        /// Start date (YYYY-MM-DD). Defaults to the first day in the input.
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Defaults to the last day in the input.
        #[arg(short, long)]
        end: Option<String>,

        /// Candle timeframe (tick, m1, h1, ... or seconds)
        #[arg(short, long, default_value = "tick")]
        timeframe: String,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Write a header row
        #[arg(long)]
        header: bool,

        /// Tick price folded into candles
        #[arg(short, long, value_enum, default_value = "ask")]
        price: PriceArg,
    },

    /// List named timeframes
    Timeframes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Convert {
            input,
            symbol,
            start,
            end,
            timeframe,
            output_dir,
            header,
            price,
        } => commands::convert::convert(
            &input,
            &symbol,
            start.as_deref(),
            end.as_deref(),
            &timeframe,
            output_dir,
            header,
            price.into(),
            cli.quiet,
        ),
        Commands::Timeframes => {
            commands::timeframes::list_timeframes();
            Ok(())
        }
    }
}
