//! piiscan CLI
//!
//! Command-line entry point for scanning a CSV dataset and writing a redacted copy

use clap::Parser;
use piiscan_cli::{ScanConfig, process_csv};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "piiscan")]
#[command(about = "piiscan - PII detection and redaction for CSV datasets", long_about = None)]
struct Cli {
    /// Input CSV with record_id and data_json columns
    input: PathBuf,

    /// Path to configuration file (TOML or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the redacted CSV
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Qualifying fields needed to flag combinatorial PII
    #[arg(long)]
    combination_threshold: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(config_path) => ScanConfig::from_file(config_path)?,
        None => ScanConfig::default(),
    };

    // Merge environment variables (they override config file)
    config.merge_env();

    // CLI flags have the highest precedence
    if let Some(output) = cli.output {
        config.output.path = output.to_string_lossy().into_owned();
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(threshold) = cli.combination_threshold {
        config.classifier.combination_threshold = threshold;
    }

    let filter = EnvFilter::new(config.log_level().to_string());
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(config_path) = &cli.config {
        info!("Loaded configuration from {}", config_path.display());
    }

    let output_path = config.output_path();
    info!("Processing {}...", cli.input.display());

    let summary = process_csv(&cli.input, &output_path, &config).await?;

    println!("Processing complete. Output written to {}.", output_path.display());
    println!("  Total rows: {}", summary.total);
    println!("  Written: {}", summary.written);
    println!("  Containing PII: {}", summary.flagged);
    println!("  Skipped: {}", summary.skipped);

    Ok(())
}
