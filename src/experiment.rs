use crate::algorithm::Workload;
use crate::config::ExperimentConfig;
use crate::error::{BenchError, Result};
use crate::report::Report;
use rand::Rng;
use serde::Serialize;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Measured time and theoretical cost for one input size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sample {
    pub n: usize,
    /// Wall-clock time of one run, averaged over the trials and truncated.
    pub measured_nanos: u64,
    pub theoretical: f64,
}

/// A timing experiment that runs a [`Workload`] over the configured sizes and
/// fits a single scaling constant against its cost model.
pub struct Experiment<W: Workload> {
    pub workload: W,
    pub config: ExperimentConfig,
}

impl<W: Workload> Experiment<W> {
    pub fn new(workload: W, config: ExperimentConfig) -> Self {
        Self { workload, config }
    }

    /// Runs the whole experiment: warm-up, one sample per size, then the fit.
    ///
    /// The configuration is validated first, so an unreachable threshold fails
    /// before any time is spent measuring.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Report> {
        self.config.validate()?;
        info!(
            workload = self.workload.name(),
            sizes = self.config.sizes.len(),
            trials = self.config.trials,
            "starting experiment"
        );

        self.warm_up(rng);

        let samples: Vec<Sample> = self
            .config
            .sizes
            .iter()
            .map(|&n| self.measure(n, rng))
            .collect();

        let constant = scaling_constant(&samples, self.config.threshold)?;
        info!(workload = self.workload.name(), scaling_constant = constant, "fitted scaling constant");

        Ok(Report::new(
            self.workload.name(),
            self.workload.cost_model(),
            self.config.clone(),
            &samples,
            constant,
        ))
    }

    /// Untimed runs so the first measured size does not pay for cold caches
    /// and page faults.
    pub fn warm_up<R: Rng + ?Sized>(&self, rng: &mut R) {
        for _ in 0..self.config.warmup_runs {
            let input = self.workload.generate(self.config.warmup_size, rng);
            black_box(self.workload.run(&input));
        }
    }

    /// Times the workload at size `n`, averaged over the configured trials.
    ///
    /// Each trial gets a freshly generated input; generation is outside the
    /// timed window.
    pub fn measure<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Sample {
        let trials = self.config.trials.max(1);
        let mut total = Duration::ZERO;
        for _ in 0..trials {
            let input = self.workload.generate(n, rng);
            let (output, elapsed) = time(|| self.workload.run(black_box(&input)));
            total += elapsed;
            drop(output);
        }

        let mean = total.as_nanos() / trials as u128;
        let sample = Sample {
            n,
            measured_nanos: u64::try_from(mean).unwrap_or(u64::MAX),
            theoretical: self.workload.cost_model().evaluate(n),
        };
        debug!(n, measured_nanos = sample.measured_nanos, theoretical = sample.theoretical, "measured size");
        sample
    }
}

/// Runs `f` once and returns its result with the elapsed wall-clock time.
pub fn time<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let output = black_box(f());
    (output, start.elapsed())
}

/// Mean of `measured / theoretical` over the samples with `n >= threshold`.
///
/// Samples whose theoretical cost is not a positive finite number are skipped.
/// Returns [`BenchError::NoSamplesAboveThreshold`] when nothing qualifies
/// instead of producing NaN.
pub fn scaling_constant(samples: &[Sample], threshold: usize) -> Result<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for s in samples.iter().filter(|s| s.n >= threshold) {
        if !(s.theoretical.is_finite() && s.theoretical > 0.0) {
            warn!(n = s.n, theoretical = s.theoretical, "skipping sample without a positive theoretical cost");
            continue;
        }
        sum += s.measured_nanos as f64 / s.theoretical;
        count += 1;
    }

    if count == 0 {
        return Err(BenchError::NoSamplesAboveThreshold { threshold });
    }
    Ok(sum / count as f64)
}
