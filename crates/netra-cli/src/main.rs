//! `netra` command line entry point.

mod dashboard;
mod logging;
mod settings;
mod telemetry;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use serde_json::json;

use netra_core::{Frame, PROFILE_VERSION};
use netra_diagnostics::{Alert, DiagnosticEngine};
use netra_ingest::{scan_file, FileFormat};
use netra_profile::{to_flat_json, Profile, ProfileEngine, ProfileOptions};

#[derive(Parser, Debug)]
#[command(
    name = "netra",
    version,
    about = "Profile tabular datasets: statistics, distributions, and quality alerts."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Profile a dataset and render the report.
    Profile(ProfileArgs),
    /// Print version and environment details.
    Info,
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// Path to the dataset (CSV, TSV, JSON, NDJSON).
    file_path: PathBuf,

    /// Emit the raw profile as JSON on stdout instead of the dashboard.
    #[arg(long = "json")]
    json_output: bool,

    /// Number of histogram bins for numeric columns.
    #[arg(long, default_value_t = 20)]
    bins: usize,

    /// Number of frequent values to keep per column.
    #[arg(long = "top-k", default_value_t = 10)]
    top_k: usize,

    /// Path to a settings file with diagnostic thresholds.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Profile(args) => {
            if args.json_output {
                run_profile_json(&args)
            } else {
                run_profile_dashboard(&args)
            }
        }
        Command::Info => {
            run_info();
            ExitCode::SUCCESS
        }
    }
}

struct Report {
    frame: Frame,
    format: FileFormat,
    file_size: u64,
    load_time: f64,
    profile: Profile,
    alerts: Vec<Alert>,
}

enum StageError {
    Settings(String),
    Load(String),
    Engine(String),
}

impl StageError {
    fn message(&self) -> &str {
        match self {
            StageError::Settings(msg) | StageError::Load(msg) | StageError::Engine(msg) => msg,
        }
    }
}

fn build_report(args: &ProfileArgs) -> Result<Report, StageError> {
    let config = settings::load(args.config.as_deref())
        .map_err(|err| StageError::Settings(err.to_string()))?;

    let started = Instant::now();
    let (frame, format) =
        scan_file(&args.file_path).map_err(|err| StageError::Load(err.to_string()))?;
    let load_time = started.elapsed().as_secs_f64();
    let file_size = std::fs::metadata(&args.file_path)
        .map(|meta| meta.len())
        .unwrap_or(0);

    let options = ProfileOptions {
        bins: args.bins,
        top_k: args.top_k,
    };
    let profile = ProfileEngine::new(options)
        .run(&frame)
        .map_err(|err| StageError::Engine(err.to_string()))?;
    let alerts = DiagnosticEngine::new(config.diagnostics).run(&profile);

    tracing::info!(
        event = "profile_completed",
        path = %args.file_path.display(),
        rows = profile.row_count,
        columns = profile.columns.len(),
        alerts = alerts.len(),
        engine_time = profile.meta.engine_time,
    );

    Ok(Report {
        frame,
        format,
        file_size,
        load_time,
        profile,
        alerts,
    })
}

fn run_profile_json(args: &ProfileArgs) -> ExitCode {
    match build_report(args) {
        Ok(report) => {
            let mut map = to_flat_json(&report.profile);
            match serde_json::to_value(&report.alerts) {
                Ok(alerts) => {
                    map.insert("alerts".to_string(), alerts);
                }
                Err(err) => {
                    println!("{}", json!({ "error": err.to_string() }));
                    return ExitCode::FAILURE;
                }
            }
            println!("{}", serde_json::Value::Object(map));
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", json!({ "error": err.message() }));
            ExitCode::FAILURE
        }
    }
}

fn run_profile_dashboard(args: &ProfileArgs) -> ExitCode {
    if !args.file_path.exists() {
        dashboard::fatal_error(
            "Data Source",
            "File not found on disk.",
            &args.file_path.display().to_string(),
        );
        return ExitCode::FAILURE;
    }

    let report = match build_report(args) {
        Ok(report) => report,
        Err(err) => {
            let title = match err {
                StageError::Settings(_) => "Settings",
                StageError::Load(_) => "Data Source",
                StageError::Engine(_) => "Profile Engine",
            };
            dashboard::fatal_error(
                title,
                err.message(),
                &args.file_path.display().to_string(),
            );
            return ExitCode::FAILURE;
        }
    };

    dashboard::data_source_card(
        &args.file_path,
        report.format.label(),
        report.file_size,
        &report.frame,
        report.load_time,
    );

    let engine_time = report.profile.meta.engine_time;
    let throughput = throughput_gb_s(report.file_size, engine_time);
    dashboard::telemetry_card(engine_time, throughput, telemetry::resident_memory_mb());

    dashboard::health_card(&report.alerts, report.profile.row_count);
    dashboard::variable_explorer(&report.profile);

    for warning in &report.profile.meta.warnings {
        tracing::warn!(event = "profile_warning", message = %warning);
    }

    ExitCode::SUCCESS
}

fn throughput_gb_s(file_size: u64, engine_time: f64) -> Option<f64> {
    if engine_time <= 0.0 || file_size == 0 {
        return None;
    }
    Some(file_size as f64 / engine_time / (1024.0 * 1024.0 * 1024.0))
}

fn run_info() {
    println!("netra {}", env!("CARGO_PKG_VERSION"));
    println!("profile contract: {PROFILE_VERSION}");
    println!("os: {} ({})", std::env::consts::OS, std::env::consts::ARCH);
    println!("settings file: {}", settings_location());
}

fn settings_location() -> String {
    let path = Path::new(settings::SETTINGS_FILE);
    if path.exists() {
        format!("{} (found)", settings::SETTINGS_FILE)
    } else {
        format!("{} (not present, defaults apply)", settings::SETTINGS_FILE)
    }
}
