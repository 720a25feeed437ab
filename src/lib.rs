//! # scalefit
//!
//! `scalefit` measures how the running time of an algorithm grows with its
//! input size and fits a single constant that scales a theoretical cost model
//! onto the measurements. It ships two experiments, and can be compiled to
//! WebAssembly (WASM) to run the algorithms from JavaScript.
//!
//! ## Experiments
//!
//! - **Nested loop**: two random arrays are combined by a kernel whose index
//!   sequences grow geometrically, compared against `(log₂ n)²`.
//! - **Convex hull**: the monotone chain hull of random points, averaged over
//!   many trials per size, compared against `n log₂ n`.
//!
//! The scaling constant is the mean of `measured / theoretical` over the sizes
//! at or above a threshold, so small inputs do not dominate the fit.
//!
//! ## Example
//!
//! ```no_run
//! use rand::SeedableRng;
//! use scalefit::{ConvexHull, Experiment, ExperimentConfig};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let config = ExperimentConfig::new(vec![100, 1_000, 10_000], 1_000).with_trials(10);
//! let report = Experiment::new(ConvexHull, config).run(&mut rng)?;
//! print!("{}", report);
//! # Ok::<(), scalefit::BenchError>(())
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`Experiment`] struct, generic over a [`Workload`].

mod bounds;
mod point;
mod generators;
mod model;
mod config;
mod error;
mod experiment;
mod report;
pub mod algorithm;
pub mod cli;
pub mod wasm;

pub use algorithm::Workload;
pub use algorithm::convex_hull::{convex_hull, ConvexHull};
pub use algorithm::nested_loop::{perform_experiment, NestedLoop};
pub use bounds::Bounds;
pub use bounds::ARRAY_VALUE_BOUND;
pub use bounds::COORDINATE_BOUNDS;
pub use bounds::COORDINATE_LIMIT;
pub use config::ExperimentConfig;
pub use config::{CONVEX_HULL_SIZES, CONVEX_HULL_THRESHOLD, CONVEX_HULL_TRIALS};
pub use config::{NESTED_LOOP_SIZES, NESTED_LOOP_THRESHOLD};
pub use error::{BenchError, Result};
pub use experiment::{scaling_constant, time, Experiment, Sample};
pub use generators::{generate_random_array, generate_random_points};
pub use model::CostModel;
pub use point::{cross, Point, Turn};
pub use report::{Report, ReportRow};
