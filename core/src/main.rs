//! Runtime Bench CLI
//! Prints array, string and math timings to stdout

use anyhow::Context;
use runtime_bench::{write_report, BenchmarkRunner, Config};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env().context("loading configuration")?;

    init_logging(&config)?;
    info!("Configuration loaded | label: {}", config.report.label);

    let runner = BenchmarkRunner::new(config);
    let report = runner.run();

    let stdout = std::io::stdout();
    write_report(&report, runner.config().report.format, stdout.lock())
        .context("writing report")?;

    Ok(())
}

/// Logs go to stderr; stdout carries only the report
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .context("invalid log level")?;

    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    if config.logging.json_output {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}
