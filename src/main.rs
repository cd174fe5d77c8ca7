// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod data;
mod source;
mod ui;

use data::{apply_max_bpm, TimeBasis, TrendReport};
use source::{SampleSource, SchemaMapping, SchemaOverrides, SqliteSource};
use ui::OutputMode;

#[derive(Parser, Debug)]
#[command(name = "hrtrend")]
#[command(about = "Daily/weekly/monthly heart-rate trend reports from a Health Connect SQLite export")]
struct Args {
    /// Path to the SQLite database export
    db_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputMode::Console)]
    output: OutputMode,

    /// Ignore heart rates above this value (inclusive bound; default: no limit)
    #[arg(long)]
    max_bpm: Option<f64>,

    /// Time basis for calendar bucketing
    #[arg(long, value_enum, default_value_t = TimeBasis::Local)]
    timezone: TimeBasis,

    /// Table holding the samples (default: Health Connect's)
    #[arg(long)]
    table: Option<String>,

    /// Epoch-milliseconds timestamp column
    #[arg(long)]
    time_column: Option<String>,

    /// Beats-per-minute column
    #[arg(long)]
    bpm_column: Option<String>,

    /// Mapping file overriding the default table/column names
    #[arg(long)]
    schema_config: Option<PathBuf>,

    /// Where to write the chart in graph mode
    #[arg(long, default_value = "heart_rate_trends.html")]
    chart_out: PathBuf,

    /// List the configured table's columns and exit
    #[arg(long)]
    inspect_schema: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let overrides = SchemaOverrides {
        table: args.table.clone(),
        time_column: args.time_column.clone(),
        bpm_column: args.bpm_column.clone(),
    };
    let schema = SchemaMapping::resolve(args.schema_config.as_deref(), &overrides)
        .context("invalid schema mapping configuration")?;

    let source = SqliteSource::open(&args.db_file, schema)?;

    if args.inspect_schema {
        return run_inspect(&source);
    }

    source.validate()?;
    run_report(&source, &args)
}

/// Print the configured table's columns, for fixing a schema mismatch.
fn run_inspect(source: &SqliteSource) -> Result<()> {
    let columns = source.columns()?;

    println!("Columns of table '{}':", source.schema().table);
    println!("{:<5} {:<24} {}", "Index", "Name", "Type");
    for column in &columns {
        println!(
            "{:<5} {:<24} {}",
            column.index, column.name, column.declared_type
        );
    }
    Ok(())
}

/// Run the fetch -> filter -> aggregate -> present pipeline.
fn run_report<S: SampleSource>(source: &S, args: &Args) -> Result<()> {
    let samples = source.fetch()?;
    info!(
        samples = samples.len(),
        source = source.description(),
        "fetched heart-rate samples"
    );

    if let Some(max) = args.max_bpm {
        info!(max_bpm = max, "ignoring heart rates above threshold");
    }
    let samples = apply_max_bpm(samples, args.max_bpm);

    if samples.is_empty() {
        // Not an error: render empty output rather than aborting.
        warn!("no heart-rate samples matched; output will be empty");
    }

    let report = TrendReport::build(&samples, args.timezone);

    match args.output {
        OutputMode::Console => ui::console::print_report(&report)?,
        OutputMode::Graph => ui::chart::show_report(&report, &args.chart_out),
    }
    Ok(())
}
