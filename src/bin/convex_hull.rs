//! Times the monotone chain convex hull, averaged over 1000 trials per size,
//! and compares it with `n log₂ n`.
//!
//! Usage:
//!     cargo run --release --bin convex-hull
//!     cargo run --release --bin convex-hull -- --seed 42 --json

use scalefit::{ConvexHull, ExperimentConfig};

fn main() -> anyhow::Result<()> {
    scalefit::cli::run(ConvexHull, ExperimentConfig::convex_hull())
}
