use crate::model::CostModel;
use rand::Rng;

pub mod convex_hull;
pub mod nested_loop;

/// Trait defining an algorithm under test.
/// This allows the same [`Experiment`](crate::Experiment) harness to time the
/// nested-loop kernel and the convex hull.
pub trait Workload {
    /// Input built by [`Workload::generate`] and consumed by [`Workload::run`].
    type Input;
    /// Result of one run. It is kept alive until the timer has stopped.
    type Output;

    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Theoretical cost the measurements are fitted against.
    fn cost_model(&self) -> CostModel;

    /// Build a fresh input of size `n`.
    fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Self::Input;

    /// Run the algorithm once. This is the only code inside the timed window.
    fn run(&self, input: &Self::Input) -> Self::Output;
}
