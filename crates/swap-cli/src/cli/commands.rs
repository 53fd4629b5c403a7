use super::{CliError, SUCCESS_EXIT};
use super::helpers::*;
use std::path::PathBuf;
use swap_core::result::{identify_warnings, iteration_stats, parse_output_csv, OutputKind, TimeSeries};
use swap_core::{parse, render, ConfigDocument};

#[derive(clap::Args)]
pub(super) struct CheckArgs {
    /// Directory with the .swp file and its satellites
    #[arg(value_name = "dir")]
    dir: PathBuf,
}

#[derive(clap::Args)]
pub(super) struct RenderArgs {
    /// JSON configuration document
    #[arg(long)]
    config: PathBuf,

    /// Directory the input files are written to
    #[arg(long)]
    output: PathBuf,
}

#[derive(clap::Args)]
pub(super) struct NormalizeArgs {
    /// Directory with the .swp file and its satellites
    #[arg(value_name = "dir")]
    dir: PathBuf,

    /// Directory the normalized files are written to
    #[arg(long)]
    output: PathBuf,
}

#[derive(clap::Args)]
pub(super) struct ExportArgs {
    /// Directory with the .swp file and its satellites
    #[arg(value_name = "dir")]
    dir: PathBuf,

    /// JSON output path (default: stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct ResultArgs {
    /// SWAP run log
    #[arg(long)]
    log: PathBuf,

    /// Csv output indexed by DATETIME
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Depth csv output indexed by DATE
    #[arg(long)]
    csv_tz: Option<PathBuf>,
}

pub(super) fn run_check_command(args: CheckArgs) -> Result<i32, CliError> {
    let blobs = load_directory(&args.dir)?;
    let model = parse(&blobs)?;
    println!("{}", model_summary(&model));
    println!("Check status: PASS");
    Ok(SUCCESS_EXIT)
}

pub(super) fn run_render_command(args: RenderArgs) -> Result<i32, CliError> {
    let model = ConfigDocument::load(&args.config)?.into_model()?;
    for path in write_rendered(&render(&model), &args.output)? {
        println!("wrote {}", path.display());
    }
    Ok(SUCCESS_EXIT)
}

pub(super) fn run_normalize_command(args: NormalizeArgs) -> Result<i32, CliError> {
    let model = parse(&load_directory(&args.dir)?)?;
    for path in write_rendered(&render(&model), &args.output)? {
        println!("wrote {}", path.display());
    }
    Ok(SUCCESS_EXIT)
}

pub(super) fn run_export_command(args: ExportArgs) -> Result<i32, CliError> {
    let model = parse(&load_directory(&args.dir)?)?;
    let json = ConfigDocument::from_model(&model)
        .to_json()
        .map_err(anyhow::Error::from)?;
    match args.output {
        Some(path) => {
            write_text(&path, &json)?;
            println!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(SUCCESS_EXIT)
}

fn print_series(label: &str, series: &TimeSeries) {
    println!("{label}: {} rows, columns {}", series.len(), series.columns.join(", "));
    let sums = series.yearly_sums();
    println!("Yearly sums:");
    println!("  YEAR  {}", sums.columns.join("  "));
    for (year, values) in &sums.years {
        let values: Vec<String> = values.iter().map(|value| format!("{value:.4}")).collect();
        println!("  {year}  {}", values.join("  "));
    }
}

pub(super) fn run_result_command(args: ResultArgs) -> Result<i32, CliError> {
    let log = read_text(&args.log)?;
    let warnings = identify_warnings(&log);
    println!("Warnings: {}", warnings.len());
    for warning in &warnings {
        println!("  {warning}");
    }
    if let Some(stats) = iteration_stats(&log) {
        println!("{}", stats.trim_end());
    }

    let outputs = [(OutputKind::Csv, args.csv), (OutputKind::CsvTz, args.csv_tz)];
    for (kind, path) in outputs {
        let Some(path) = path else {
            continue;
        };
        let series = parse_output_csv(&read_text(&path)?, kind.index_column())?;
        print_series(&path.display().to_string(), &series);
    }
    Ok(SUCCESS_EXIT)
}
