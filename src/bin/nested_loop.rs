//! Times the nested-loop kernel for n = 10 .. 10^8 and compares it with `(log₂ n)²`.
//!
//! Usage:
//!     cargo run --release --bin nested-loop
//!     cargo run --release --bin nested-loop -- --seed 42 --json

use scalefit::{ExperimentConfig, NestedLoop};

fn main() -> anyhow::Result<()> {
    scalefit::cli::run(NestedLoop, ExperimentConfig::nested_loop())
}
