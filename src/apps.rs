use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum, error::ErrorKind};

use crate::config::{ParsePolicy, PrepConfig};
use crate::constants::classify::DEFAULT_EQUIL_STEP_THRESHOLD;
use crate::constants::outputs::DEFAULT_OUTPUT_DIR;
use crate::constants::plot::DEFAULT_PLOT_FILENAME;
use crate::pipeline::process_simulations;
use crate::plot::render_convergence_plot;
use crate::series::collect_series;
use crate::types::StepCount;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ParsePolicyArg {
    Abort,
    SkipFile,
}

impl From<ParsePolicyArg> for ParsePolicy {
    fn from(value: ParsePolicyArg) -> Self {
        match value {
            ParsePolicyArg::Abort => ParsePolicy::AbortBatch,
            ParsePolicyArg::SkipFile => ParsePolicy::SkipFile,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "prepare_runs",
    disable_help_subcommand = true,
    about = "Slice FEP energy logs into percentile derivative logs",
    long_about = "Split each forward_*.fepout log into equilibration and production phases, \
                  then write 99 derivative logs holding the full equilibration run plus \
                  1%-99% of the production run."
)]
struct PrepareRunsCli {
    #[arg(
        long = "input-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory scanned (non-recursively) for forward_*.fepout logs"
    )]
    input_dir: PathBuf,
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory receiving the 99 derivative logs (created if absent)"
    )]
    output_dir: PathBuf,
    #[arg(
        long = "equil-threshold",
        value_name = "STEPS",
        default_value_t = DEFAULT_EQUIL_STEP_THRESHOLD,
        help = "Step count at or below which a record belongs to equilibration"
    )]
    equil_threshold: StepCount,
    #[arg(
        long = "on-parse-error",
        value_enum,
        default_value_t = ParsePolicyArg::Abort,
        help = "Whether a malformed step count aborts the batch or skips the file"
    )]
    on_parse_error: ParsePolicyArg,
}

#[derive(Debug, Parser)]
#[command(
    name = "plot_convergence",
    disable_help_subcommand = true,
    about = "Plot the free-energy convergence series from derivative logs",
    long_about = "Read the final \u{0394}G estimate from each simulation_NNpercent.fepout log \
                  and render the percentage-vs-\u{0394}G series as a line chart."
)]
struct PlotConvergenceCli {
    #[arg(
        long = "runs-dir",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory holding the simulation_NNpercent.fepout derivative logs"
    )]
    runs_dir: PathBuf,
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_PLOT_FILENAME,
        help = "Path of the rendered chart image"
    )]
    output: PathBuf,
    #[arg(
        long = "series-json",
        value_name = "PATH",
        help = "Optionally also write the collected (percent, value) pairs as JSON"
    )]
    series_json: Option<PathBuf>,
}

/// Runner for the `prepare_runs` binary.
pub fn run_prepare_runs<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    init_subscriber();
    let Some(cli) = parse_cli::<PrepareRunsCli, _>(
        std::iter::once("prepare_runs".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let config = PrepConfig {
        equil_step_threshold: cli.equil_threshold,
        parse_policy: cli.on_parse_error.into(),
        ..PrepConfig::default()
    };

    let summary = process_simulations(&cli.input_dir, &cli.output_dir, &config)?;
    if summary.skipped_logs > 0 {
        println!(
            "Skipped {} input file(s) with malformed records.",
            summary.skipped_logs
        );
    }
    println!(
        "Done. Generated 99 files in '{}' from {} input file(s).",
        cli.output_dir.display(),
        summary.processed_logs
    );
    Ok(())
}

/// Runner for the `plot_convergence` binary.
pub fn run_plot_convergence<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    init_subscriber();
    let Some(cli) = parse_cli::<PlotConvergenceCli, _>(
        std::iter::once("plot_convergence".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let series = collect_series(&cli.runs_dir)?;
    println!("Extracted {} convergence point(s).", series.len());

    if let Some(json_path) = &cli.series_json {
        fs::write(json_path, serde_json::to_string_pretty(&series)?)?;
        println!("Series written to {}", json_path.display());
    }

    render_convergence_plot(&series, &cli.output)?;
    println!("Plot saved to {}", cli.output.display());
    Ok(())
}

fn init_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
