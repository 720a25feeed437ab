//! Experiment configuration: input sizes, fit threshold and trial counts.
//!
//! The two presets reproduce the fixed size lists of the nested-loop and
//! convex hull experiments. Tests build their own configurations with small
//! literal size lists.

use crate::error::{BenchError, Result};
use serde::Serialize;

/// Sizes for the nested-loop experiment, 10 through 10^8.
pub const NESTED_LOOP_SIZES: [usize; 8] = [
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
];
/// Only sizes at or above this value contribute to the nested-loop fit.
pub const NESTED_LOOP_THRESHOLD: usize = 100_000;

/// Sizes for the convex hull experiment.
pub const CONVEX_HULL_SIZES: [usize; 7] = [100, 500, 1_000, 5_000, 10_000, 20_000, 50_000];
/// Only sizes at or above this value contribute to the convex hull fit.
pub const CONVEX_HULL_THRESHOLD: usize = 5_000;
/// Timed trials per size for the convex hull experiment.
pub const CONVEX_HULL_TRIALS: usize = 1_000;

/// Configuration of one experiment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperimentConfig {
    /// Input sizes, measured in order.
    pub sizes: Vec<usize>,
    /// Minimum size included in the scaling-constant fit.
    pub threshold: usize,
    /// Timed runs per size; the recorded time is their mean.
    pub trials: usize,
    /// Untimed runs before the first measurement.
    pub warmup_runs: usize,
    /// Input size used for the warm-up runs.
    pub warmup_size: usize,
}

impl ExperimentConfig {
    /// Configuration with a single timed run per size and no warm-up.
    pub fn new(sizes: Vec<usize>, threshold: usize) -> Self {
        Self {
            sizes,
            threshold,
            trials: 1,
            warmup_runs: 0,
            warmup_size: 0,
        }
    }

    /// Preset for the nested-loop experiment: one run per size.
    pub fn nested_loop() -> Self {
        Self::new(NESTED_LOOP_SIZES.to_vec(), NESTED_LOOP_THRESHOLD)
    }

    /// Preset for the convex hull experiment: 5 warm-up hulls of 1000 points,
    /// then 1000 timed trials per size.
    pub fn convex_hull() -> Self {
        Self::new(CONVEX_HULL_SIZES.to_vec(), CONVEX_HULL_THRESHOLD)
            .with_trials(CONVEX_HULL_TRIALS)
            .with_warmup(5, 1_000)
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_warmup(mut self, runs: usize, size: usize) -> Self {
        self.warmup_runs = runs;
        self.warmup_size = size;
        self
    }

    /// Sizes that contribute to the scaling-constant fit.
    pub fn fitted_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.sizes.iter().copied().filter(move |&n| n >= self.threshold)
    }

    /// Checks the configuration before any measurement is taken.
    ///
    /// Rejects an empty size list, a size of 0, zero trials, and a threshold
    /// no configured size reaches.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::EmptySizeList);
        }
        if self.sizes.contains(&0) {
            return Err(BenchError::ZeroSize);
        }
        if self.trials == 0 {
            return Err(BenchError::ZeroTrials);
        }
        // n = 1 has a theoretical cost of 0 and never counts towards the fit.
        if !self.fitted_sizes().any(|n| n > 1) {
            return Err(BenchError::NoSamplesAboveThreshold {
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}
