use crate::algorithm::Workload;
use crate::generators::generate_random_array;
use crate::model::CostModel;
use rand::Rng;

const INNER_GROWTH: f64 = std::f64::consts::SQRT_2;
// √3
const OUTER_GROWTH: f64 = 1.732_050_807_568_877_2;
const START_INDEX: usize = 5;

/// Sums `a[j] * b[k]` over two geometrically growing index sequences.
///
/// The outer index starts at 5 and grows by a factor of √3 while `j < n / 2`;
/// the inner index starts at 5 and grows by √2 while `k < n`. Both factors
/// are applied in floating point and truncated. For `n < 12` the outer loop
/// never runs and the result is 0.
///
/// # Panics
///
/// Panics if `n` exceeds the length of `a` or `b`.
pub fn perform_experiment(a: &[i32], b: &[i32], n: usize) -> i64 {
    let mut sum: i64 = 0;
    let mut j = START_INDEX;
    while j < n / 2 {
        let mut k = START_INDEX;
        while k < n {
            sum += a[j] as i64 * b[k] as i64;
            k = (k as f64 * INNER_GROWTH) as usize;
        }
        j = (j as f64 * OUTER_GROWTH) as usize;
    }
    sum
}

/// The nested-loop kernel over two random arrays, compared against `(log₂ n)²`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NestedLoop;

impl Workload for NestedLoop {
    type Input = (Vec<i32>, Vec<i32>);
    type Output = i64;

    fn name(&self) -> &'static str {
        "nested-loop"
    }

    fn cost_model(&self) -> CostModel {
        CostModel::LogSquared
    }

    fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Self::Input {
        let a = generate_random_array(n, rng);
        let b = generate_random_array(n, rng);
        (a, b)
    }

    fn run(&self, input: &Self::Input) -> Self::Output {
        let (a, b) = input;
        perform_experiment(a, b, a.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_arrays() {
        assert_eq!(perform_experiment(&[], &[], 0), 0);
    }

    #[test]
    fn test_small_n_is_zero() {
        let a = vec![1; 11];
        let b = vec![1; 11];
        for n in 0..=11 {
            assert_eq!(perform_experiment(&a, &b, n), 0, "n = {}", n);
        }
    }

    #[test]
    fn test_index_sequence_with_ones() {
        // n = 20: j visits 5, 8 (then 13 >= 10); k visits 5, 7, 9, 12, 16 (then 22 >= 20).
        let a = vec![1; 20];
        let b = vec![1; 20];
        assert_eq!(perform_experiment(&a, &b, 20), 2 * 5);
    }

    #[test]
    fn test_picks_expected_products() {
        let mut a = vec![0; 20];
        let mut b = vec![0; 20];
        a[5] = 3;
        a[8] = 2;
        b[16] = 7;
        b[6] = 100; // never visited
        assert_eq!(perform_experiment(&a, &b, 20), 3 * 7 + 2 * 7);
    }

    #[test]
    fn test_scales_with_values() {
        let ones = vec![1; 1000];
        let maxed = vec![99; 1000];
        let visits = perform_experiment(&ones, &ones, 1000);
        assert!(visits > 0);
        assert_eq!(perform_experiment(&maxed, &maxed, 1000), 99 * 99 * visits);
    }

    #[test]
    fn test_deterministic() {
        let a: Vec<i32> = (0..5000).map(|i| i % 100).collect();
        let b: Vec<i32> = (0..5000).map(|i| (i * 7) % 100).collect();
        assert_eq!(perform_experiment(&a, &b, 5000), perform_experiment(&a, &b, 5000));
    }
}
