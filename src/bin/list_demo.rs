use clap::Parser;
use log::LevelFilter;
use std::io;

/// Builds a list from the given values, prints it and tears it down, then
/// shows a released alias being refused instead of dereferenced.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Values appended to the list, in order
    #[arg(default_values_t = [10, 20], allow_negative_numbers = true)]
    values: Vec<i32>,

    /// Starting value of the aliased integer
    #[arg(long, default_value_t = 200, allow_negative_numbers = true)]
    alias_start: i32,

    /// More output per occurrence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    owned_list::scenario::run(&cli.values, cli.alias_start, &mut io::stdout().lock())?;

    Ok(())
}
