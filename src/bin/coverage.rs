use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use literwatch::data::coverage::{write_csv_listings, Coverage};
use literwatch::data::loader::{load, DataSource};

/// Report how much of the day a times.json dataset covers
#[derive(Parser, Debug)]
#[command(name = "literwatch-coverage", version)]
struct Args {
    /// Dataset to inspect: a path or an http(s) URL
    #[arg(value_name = "PATH|URL", default_value = literwatch::config::DEFAULT_DATA)]
    source: DataSource,

    /// Also write covered_times.csv and missing_times.csv into this directory
    #[arg(long, value_name = "DIR")]
    csv_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dataset = load(&args.source)?;
    let cov = Coverage::of(&dataset);

    println!("Coverage of {}", args.source);
    println!("  minutes covered : {} / 1440 ({:.1}%)", cov.covered, cov.percent());
    println!("  minutes missing : {}", cov.missing());
    println!("  quotes          : {}", cov.total_quotes);
    if let Some(mean) = cov.mean_quotes() {
        println!("  mean per minute : {mean:.1}");
        println!(
            "  min/median/max  : {}/{}/{}",
            cov.min_quotes.unwrap_or_default(),
            cov.median_quotes.unwrap_or_default(),
            cov.max_quotes.unwrap_or_default()
        );
    }

    println!();
    println!("Quotes per minute (top 15):");
    for (quotes, minutes) in cov.distribution.iter().rev().take(15) {
        println!("  {quotes:>4} quotes: {minutes} minutes");
    }

    println!();
    println!("Covered minutes per hour:");
    for (hour, count) in cov.per_hour.iter().enumerate() {
        println!("  {hour:02}h {count:>2} {}", "#".repeat(*count));
    }

    if let Some(dir) = &args.csv_dir {
        write_csv_listings(&dataset, dir)?;
        println!();
        println!("Wrote listings to {}", dir.display());
    }

    Ok(())
}
