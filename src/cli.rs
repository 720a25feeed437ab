//! Shared command-line plumbing for the experiment binaries.

use crate::algorithm::Workload;
use crate::config::ExperimentConfig;
use crate::experiment::Experiment;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Flags accepted by both experiment binaries. With no flags the preset
/// experiment runs with an entropy-seeded RNG and prints the table.
#[derive(Parser, Debug, Clone, Default)]
pub struct Args {
    /// Seed the random input generator for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Install the `tracing` subscriber. Logs go to stderr so stdout only
/// carries the report; `RUST_LOG` overrides the default `scalefit=info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("scalefit=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Parses the flags, runs `workload` under `config` and prints the report.
pub fn run<W: Workload>(workload: W, config: ExperimentConfig) -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    run_with(workload, config, &args, std::io::stdout().lock())
}

pub fn run_with<W: Workload, O: std::io::Write>(
    workload: W,
    config: ExperimentConfig,
    args: &Args,
    out: O,
) -> anyhow::Result<()> {
    if let Some(seed) = args.seed {
        tracing::info!(seed, "using fixed seed");
    }
    let mut rng = make_rng(args.seed);
    let report = Experiment::new(workload, config).run(&mut rng)?;
    report.write_to(out, args.json)?;
    Ok(())
}
