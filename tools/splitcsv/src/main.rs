use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use splitter::{split_csv, CsvPartWriter, DryRun, SplitError, SplitMode, SplitOptions, SplitReport};

mod config;

use config::{delimiter_byte, CliConfig};

/// Split a CSV file evenly into parts that each keep the header row.
///
/// Rows that do not divide evenly into the parts are dropped from the end.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file to split
    csvfile: PathBuf,

    /// Number of parts (default: 2, or `splitnum` from the config file)
    #[arg(short = 'n', long, conflicts_with = "rename", allow_negative_numbers = true)]
    splitnum: Option<i64>,

    /// Names for the new files, at least 2; also sets the number of parts
    #[arg(short, long, num_args = 1..)]
    rename: Option<Vec<String>>,

    /// Directory for the new files (default: directory of the CSV file)
    #[arg(short, long)]
    outdir: Option<PathBuf>,

    /// Prefix for the new file names
    #[arg(short, long)]
    prefix: Option<String>,

    /// Shuffle the rows before splitting
    #[arg(short, long)]
    shuffle: bool,

    /// Seed for --shuffle, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Field delimiter of the CSV file
    #[arg(short, long)]
    delimiter: Option<char>,

    /// YAML file with defaults for the options above
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show what would be written without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn split_options(cli: &Cli, config: &CliConfig) -> Result<SplitOptions> {
    let split_count = match (cli.splitnum, &cli.rename) {
        (None, None) => Some(config.splitnum),
        (Some(n), _) => match usize::try_from(n) {
            Ok(count) if count >= 1 => Some(count),
            _ => {
                return Err(SplitError::InvalidSplitCount {
                    requested: n,
                    available: None,
                }
                .into())
            }
        },
        (None, Some(_)) => None,
    };
    let mode = SplitMode::from_options(split_count, cli.rename.clone())?;

    Ok(SplitOptions {
        mode,
        shuffle: cli.shuffle || config.shuffle,
        prefix: cli.prefix.clone().unwrap_or_else(|| config.prefix.clone()),
        outdir: cli.outdir.clone(),
        delimiter: delimiter_byte(cli.delimiter.unwrap_or(config.delimiter))?,
    })
}

fn print_report(report: &SplitReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for part in &report.parts {
        println!("{} ({} rows)", part.path.display(), part.rows);
    }
    println!(
        "Split {} rows into {} parts of {} rows, {} discarded.",
        report.total_rows,
        report.parts.len(),
        report.rows_per_part,
        report.discarded
    );
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let options = split_options(&cli, &config)?;
    debug!("Resolved options: {:?}", options);

    let mut rng = match cli.seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = if cli.dry_run {
        split_csv(&cli.csvfile, &options, &mut rng, &mut DryRun)
    } else {
        split_csv(&cli.csvfile, &options, &mut rng, &mut CsvPartWriter::new(options.delimiter))
    }
    .with_context(|| format!("Failed to split {:?}", cli.csvfile))?;

    print_report(&report, cli.json)
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|e| e.downcast_ref::<SplitError>())
        .map(SplitError::exit_code)
        .unwrap_or(1)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}
