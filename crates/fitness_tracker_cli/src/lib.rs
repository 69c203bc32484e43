//! Console driver for the fitness tracker: reads packages from the command
//! line (or uses the demo batch) and prints one summary per package.

use std::io::Write;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use fitness_tracker::{Package, process_batch};

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{CliError, CliResult};

const DEFAULT_FILTER: &str = "info";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One summary message per line.
    Text,
    /// One JSON report per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CliError::Config(format!("unknown output format: {other}"))),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "fitness-tracker", version, about = "Summarize workout sensor packages")]
pub struct Args {
    /// Packages as CODE:v1,v2,... (e.g. RUN:15000,1,75). Runs the demo batch when omitted.
    #[arg(value_parser = parse_package)]
    pub packages: Vec<Package>,

    /// Output format; overrides FITNESS_TRACKER_FORMAT.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Parse `CODE:v1,v2,...`. The code itself is validated later by the factory.
pub fn parse_package(s: &str) -> CliResult<Package> {
    let (code, values) = s
        .split_once(':')
        .ok_or_else(|| CliError::Package(format!("{s}: expected CODE:v1,v2,...")))?;
    let code = code.trim();
    if code.is_empty() {
        return Err(CliError::Package(format!("{s}: missing workout code")));
    }
    let parameters = values
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| CliError::Package(format!("{s}: invalid number {v:?}")))
        })
        .collect::<CliResult<Vec<f64>>>()?;
    Ok(Package::new(code, parameters))
}

/// Build the log filter, falling back to `info` when `level` does not parse.
pub fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_new(level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER))
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Process `packages`, writing reports to `out` and per-package failures to
/// `err`. Output failures abort the run; package failures do not.
pub fn run<O, E>(
    packages: &[Package],
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> CliResult<RunSummary>
where
    O: Write,
    E: Write,
{
    let mut summary = RunSummary::default();
    for (package, result) in packages.iter().zip(process_batch(packages)) {
        match result {
            Ok(report) => {
                match format {
                    OutputFormat::Text => writeln!(out, "{}", report.message())?,
                    OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&report)?)?,
                }
                summary.succeeded += 1;
            }
            Err(e) => {
                writeln!(err, "{}: {}", package.code, e)?;
                summary.failed += 1;
            }
        }
    }
    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "batch processed"
    );
    Ok(summary)
}
