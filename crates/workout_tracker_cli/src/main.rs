use anyhow::Context;
use workout_tracker::{Calculator, Config};
use workout_tracker_cli::{process_packages, sample_packages};

fn main() -> anyhow::Result<()> {
    // Configure logging from env var `WORKOUT_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("WORKOUT_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!("workout_summary: log filter: {}", log_env);

    let config = Config::from_env().context("loading configuration")?;
    let calc = Calculator::new(config.coefficients);
    let packages = sample_packages();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = process_packages(&packages, &calc, config.output, &mut out)
        .context("writing summaries to stdout")?;

    tracing::info!(
        processed = report.processed,
        failed = report.failed.len(),
        "workout_summary: batch finished"
    );
    Ok(())
}
