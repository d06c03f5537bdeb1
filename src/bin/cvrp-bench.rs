use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use cvrp_bench::benchmark;
use cvrp_bench::config::BenchConfig;
use cvrp_bench::random::create_rng_or_entropy;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Path to the key=value benchmark configuration
    #[arg(default_value = "config.ini")]
    config: PathBuf,

    /// Seed for the random stream, overrides `seed` from the config file
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    let mut config = BenchConfig::from_file(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else if config.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        })
        .init();

    info!(
        input = %config.input_directory.display(),
        seed = ?config.seed,
        "starting benchmark"
    );
    let mut rng = create_rng_or_entropy(config.seed);
    let reports = benchmark::run(&config, &mut rng).context("benchmark failed")?;
    info!(
        instances = reports.len(),
        summary = %config.log_dir.join("summary.csv").display(),
        "done"
    );

    Ok(())
}
