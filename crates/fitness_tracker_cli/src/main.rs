use clap::Parser;
use fitness_tracker::{observability, sample_packages};
use fitness_tracker_cli::{Args, Config, env_filter, run};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(&config.log_level))
        .init();
    tracing::debug!("fitness-tracker: log filter: {}", config.log_level);
    observability::describe_metrics();

    let format = args.format.unwrap_or(config.format);
    let packages = if args.packages.is_empty() {
        tracing::debug!("fitness-tracker: no packages given, using demo batch");
        sample_packages()
    } else {
        args.packages
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let summary = run(&packages, format, &mut stdout.lock(), &mut stderr.lock())?;
    if summary.failed > 0 {
        anyhow::bail!(
            "{} of {} packages failed",
            summary.failed,
            summary.failed + summary.succeeded
        );
    }
    Ok(())
}
