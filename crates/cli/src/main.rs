//! # fi-forecast
//!
//! Command-line interface for event-augmented forecasting of Ethiopia's
//! financial inclusion indicators.

mod output;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dataset_facade::{parse_date, CsvSource, Dataset};
use forecast_facade::{
    apply_calibration, assess_targets, calibrate, load_config, ComposerConfig, ForecastComposer,
};
use output::OutputFormat;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "fi-forecast")]
#[command(about = "Financial inclusion event-impact forecasting CLI", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a unified CSV and summarise its records
    Validate {
        /// Unified records CSV
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Forecast indicators for the given years
    Forecast {
        /// Unified records CSV
        #[arg(short, long)]
        input: PathBuf,

        /// Forecast years, comma separated
        #[arg(short, long, value_delimiter = ',', default_value = "2025,2026,2027")]
        years: Vec<i32>,

        /// Indicator code; repeat for several (default: every indicator)
        #[arg(long = "indicator")]
        indicators: Vec<String>,

        /// Composer configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report raw values without clamping to the configured bounds
        #[arg(long)]
        unbounded: bool,

        /// Forecast from impact links refined by calibration
        #[arg(long)]
        calibrated: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Per-link contribution breakdown for one indicator at a date
    Impacts {
        /// Unified records CSV
        #[arg(short, long)]
        input: PathBuf,

        /// Indicator code
        #[arg(long)]
        indicator: String,

        /// Evaluation date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Composer configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Validate every impact link against observed changes
    Calibrate {
        /// Unified records CSV
        #[arg(short, long)]
        input: PathBuf,

        /// Composer configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Gaps between forecast scenarios and policy targets
    Targets {
        /// Unified records CSV
        #[arg(short, long)]
        input: PathBuf,

        /// Forecast years, comma separated
        #[arg(short, long, value_delimiter = ',', default_value = "2025,2026,2027")]
        years: Vec<i32>,

        /// Composer configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Forecast from impact links refined by calibration
        #[arg(long)]
        calibrated: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

/// Load and validate the unified records CSV
fn load_dataset(path: &Path) -> CliResult<Dataset> {
    let mut source = CsvSource::from_path(path).map_err(|e| e.to_string())?;
    let dataset = Dataset::from_source(&mut source).map_err(|e| e.to_string())?;
    info!(path = %path.display(), records = dataset.len(), "dataset loaded");
    Ok(dataset)
}

fn load_composer(config: Option<&Path>, unbounded: bool) -> CliResult<ForecastComposer> {
    let mut config = match config {
        Some(path) => load_config(path).map_err(|e| e.to_string())?,
        None => ComposerConfig::default(),
    };
    if unbounded {
        config.bounds = None;
    }
    ForecastComposer::new(config).map_err(|e| e.to_string())
}

/// The dataset with calibration refinements applied when requested
fn calibrated_dataset(
    dataset: Dataset,
    composer: &ForecastComposer,
    calibrated: bool,
) -> CliResult<Dataset> {
    if !calibrated {
        return Ok(dataset);
    }
    let reports = calibrate(&dataset, &composer.config().shapes).map_err(|e| e.to_string())?;
    let refined = apply_calibration(&dataset, &reports).map_err(|e| e.to_string())?;
    info!(
        validated = reports.iter().filter(|r| r.is_validated()).count(),
        "forecasting from calibrated impact links"
    );
    Ok(refined)
}

/// Output file when given, else stdout
fn open_output(output: Option<&Path>) -> CliResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file =
                File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn run_validate(input: PathBuf) -> CliResult<()> {
    let dataset = load_dataset(&input)?;
    let summary = dataset.summary();
    println!("{}: valid", input.display());
    println!("  observations: {}", summary.observations);
    println!("  events:       {}", summary.events);
    println!("  targets:      {}", summary.targets);
    println!("  impact links: {}", summary.impact_links);
    println!("  indicators:   {}", summary.indicators);
    for code in dataset.indicators() {
        println!(
            "    {:<24} {} observations, {} links",
            code,
            dataset.observations_for(&code).len(),
            dataset.links_for(&code).len()
        );
        if let Some(gap) = dataset.gender_gaps(&code).last() {
            println!(
                "    {:<24} gender gap {:.1} pp (male {:.1}, female {:.1}, {})",
                "",
                gap.gap(),
                gap.male,
                gap.female,
                gap.date
            );
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_forecast(
    input: PathBuf,
    years: Vec<i32>,
    indicators: Vec<String>,
    config: Option<PathBuf>,
    unbounded: bool,
    calibrated: bool,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let composer = load_composer(config.as_deref(), unbounded)?;
    let dataset = calibrated_dataset(load_dataset(&input)?, &composer, calibrated)?;

    let table = if indicators.is_empty() {
        composer.forecast_table(&dataset, &years)
    } else {
        composer.forecast_indicators(&dataset, &indicators, &years)
    }
    .map_err(|e| e.to_string())?;

    let mut out = open_output(output.as_deref())?;
    output::write_forecast(&mut *out, &table, format)?;
    out.flush().map_err(|e| e.to_string())?;

    if let Some(path) = output {
        eprintln!("Forecast written to {:?}", path);
    }
    Ok(())
}

fn run_impacts(
    input: PathBuf,
    indicator: String,
    date: String,
    config: Option<PathBuf>,
    format: OutputFormat,
) -> CliResult<()> {
    let date: NaiveDate =
        parse_date(&date).ok_or_else(|| format!("Unparseable date '{}'", date))?;
    let dataset = load_dataset(&input)?;
    let composer = load_composer(config.as_deref(), false)?;

    let point = composer
        .forecast_at(&dataset, &indicator, date)
        .map_err(|e| e.to_string())?;
    let links = dataset.links_for(&indicator);

    let mut out = io::stdout().lock();
    output::write_contributions(&mut out, &point, &links, format)
}

fn run_calibrate(input: PathBuf, config: Option<PathBuf>, format: OutputFormat) -> CliResult<()> {
    let dataset = load_dataset(&input)?;
    let composer = load_composer(config.as_deref(), false)?;
    let reports = calibrate(&dataset, &composer.config().shapes).map_err(|e| e.to_string())?;

    let mut out = io::stdout().lock();
    output::write_calibration(&mut out, &reports, format)
}

fn run_targets(
    input: PathBuf,
    years: Vec<i32>,
    config: Option<PathBuf>,
    calibrated: bool,
    format: OutputFormat,
) -> CliResult<()> {
    let composer = load_composer(config.as_deref(), false)?;
    let dataset = calibrated_dataset(load_dataset(&input)?, &composer, calibrated)?;
    let table = composer
        .forecast_table(&dataset, &years)
        .map_err(|e| e.to_string())?;
    let assessments = assess_targets(&dataset, &table);

    if assessments.is_empty() {
        println!("No targets for the forecast indicators");
        return Ok(());
    }
    let mut out = io::stdout().lock();
    output::write_targets(&mut out, &assessments, format)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Validate { input } => run_validate(input),

        Commands::Forecast {
            input,
            years,
            indicators,
            config,
            unbounded,
            calibrated,
            format,
            output,
        } => run_forecast(
            input,
            years,
            indicators,
            config,
            unbounded,
            calibrated,
            format,
            output,
        ),

        Commands::Impacts {
            input,
            indicator,
            date,
            config,
            format,
        } => run_impacts(input, indicator, date, config, format),

        Commands::Calibrate {
            input,
            config,
            format,
        } => run_calibrate(input, config, format),

        Commands::Targets {
            input,
            years,
            config,
            calibrated,
            format,
        } => run_targets(input, years, config, calibrated, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
