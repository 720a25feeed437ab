use crate::algorithm::convex_hull::convex_hull;
use crate::algorithm::nested_loop::perform_experiment;
use crate::generators::{generate_random_array, generate_random_points};
use crate::model::CostModel;
use crate::point::Point;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(typescript_custom_section)]
const TS_CONSTANTS_BOUNDS: &'static str = r#"
export const COORDINATE_LIMIT = 1000000;
export const ARRAY_VALUE_BOUND = 100;
"#;

/// Computes the convex hull of a flat `[x0, y0, x1, y1, ...]` coordinate array.
/// Returns the hull counter-clockwise in the same flat layout. A trailing odd
/// coordinate is ignored.
#[wasm_bindgen(js_name = convexHull)]
pub fn convex_hull_flat(coords: &[i32]) -> Vec<i32> {
    let points: Vec<Point> = coords.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect();
    convex_hull(&points).into_iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Runs the nested-loop kernel over the shorter of the two arrays.
#[wasm_bindgen(js_name = performExperiment)]
pub fn perform_experiment_js(a: &[i32], b: &[i32]) -> i64 {
    perform_experiment(a, b, a.len().min(b.len()))
}

/// Random points as a flat coordinate array.
#[wasm_bindgen(js_name = randomPoints)]
pub fn random_points_flat(n: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(get_seed());
    generate_random_points(n, &mut rng).into_iter().flat_map(|p| [p.x, p.y]).collect()
}

#[wasm_bindgen(js_name = randomArray)]
pub fn random_array(size: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(get_seed());
    generate_random_array(size, &mut rng)
}

/// `n log₂ n`
#[wasm_bindgen(js_name = theoreticalNLogN)]
pub fn theoretical_n_log_n(n: usize) -> f64 {
    CostModel::NLogN.evaluate(n)
}

/// `(log₂ n)²`
#[wasm_bindgen(js_name = theoreticalLogSquared)]
pub fn theoretical_log_squared(n: usize) -> f64 {
    CostModel::LogSquared.evaluate(n)
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for tests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_hull_square() {
        let hull = convex_hull_flat(&[0, 0, 0, 1, 1, 0, 1, 1, 7]);
        assert_eq!(hull, vec![0, 0, 1, 0, 1, 1, 0, 1]);
    }

    #[test]
    fn test_flat_random_points() {
        let coords = random_points_flat(25);
        assert_eq!(coords.len(), 50);
        assert!(coords.iter().all(|c| (-1_000_000..=1_000_000).contains(c)));
        assert_eq!(coords, random_points_flat(25));
    }

    #[test]
    fn test_perform_experiment_uneven_lengths() {
        let a = vec![1; 40];
        let b = vec![1; 20];
        assert_eq!(perform_experiment_js(&a, &b), perform_experiment(&a, &b, 20));
        assert_eq!(random_array(30).len(), 30);
    }

    #[test]
    fn test_theoretical_exports() {
        assert_eq!(theoretical_n_log_n(1024), 10240.0);
        assert_eq!(theoretical_log_squared(1024), 100.0);
    }
}
