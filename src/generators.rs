//! Random input generation.
//!
//! Every generator takes the random source as a parameter so a single
//! sequentially consumed RNG can be threaded through a whole run, and a
//! seeded one makes the inputs reproducible.

use crate::bounds::{ARRAY_VALUE_BOUND, COORDINATE_BOUNDS};
use crate::point::Point;
use rand::Rng;

/// Generates `size` integers drawn uniformly from `[0, 100)`.
pub fn generate_random_array<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<i32> {
    (0..size).map(|_| rng.gen_range(0..ARRAY_VALUE_BOUND)).collect()
}

/// Generates `n` points with both coordinates drawn uniformly from
/// `[-1_000_000, 1_000_000]`.
pub fn generate_random_points<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point> {
    let range = COORDINATE_BOUNDS.min..=COORDINATE_BOUNDS.max;
    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let x = rng.gen_range(range.clone());
        let y = rng.gen_range(range.clone());
        points.push(Point::new(x, y));
    }
    points
}
