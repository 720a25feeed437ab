use crate::algorithm::Workload;
use crate::generators::generate_random_points;
use crate::model::CostModel;
use crate::point::{cross, Point};
use rand::Rng;

/// Computes the convex hull of `points` with the monotone chain algorithm.
///
/// The hull is returned counter-clockwise starting from the leftmost (lowest on ties)
/// point, without repeating the start. Collinear boundary points are dropped,
/// so a fully collinear input collapses to its two extreme endpoints.
/// Inputs with fewer than 3 points are returned unchanged. Repeated points
/// appear once in the hull, so fewer than 3 distinct points come back sorted.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower = half_hull(sorted.iter());
    let mut upper = half_hull(sorted.iter().rev());

    // Each chain ends where the other one starts.
    lower.pop();
    upper.pop();
    lower.append(&mut upper);
    lower
}

/// Builds one monotone chain, popping every point that does not make a
/// strict left turn with the candidate.
fn half_hull<'a, I>(points: I) -> Vec<Point>
where
    I: Iterator<Item = &'a Point>,
{
    let mut chain: Vec<Point> = Vec::new();
    for &p in points {
        while chain.len() >= 2 && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0 {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

/// The monotone chain hull over random points, compared against `n · log₂ n`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConvexHull;

impl Workload for ConvexHull {
    type Input = Vec<Point>;
    type Output = Vec<Point>;

    fn name(&self) -> &'static str {
        "convex-hull"
    }

    fn cost_model(&self) -> CostModel {
        CostModel::NLogN
    }

    fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Self::Input {
        generate_random_points(n, rng)
    }

    fn run(&self, input: &Self::Input) -> Self::Output {
        convex_hull(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Turn;
    use std::collections::HashSet;

    fn pts(coords: &[[i32; 2]]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_unit_square() {
        let square = pts(&[[0, 0], [0, 1], [1, 0], [1, 1]]);
        let hull = convex_hull(&square);

        assert_eq!(hull.len(), 4, "hull of a square must have 4 vertices: {:?}", hull);
        let unique: HashSet<Point> = hull.iter().copied().collect();
        assert_eq!(unique.len(), 4);
        for p in &square {
            assert!(unique.contains(p), "missing corner {:?}", p);
        }
    }

    #[test]
    fn test_collinear_points() {
        let line = pts(&[[0, 0], [1, 1], [2, 2], [3, 3], [4, 4]]);
        let hull = convex_hull(&line);
        assert_eq!(hull, pts(&[[0, 0], [4, 4]]));
    }

    #[test]
    fn test_fewer_than_three_points() {
        assert!(convex_hull(&[]).is_empty());

        let one = pts(&[[5, -3]]);
        assert_eq!(convex_hull(&one), one);

        // Returned as given, not sorted.
        let two = pts(&[[9, 9], [-1, 2]]);
        assert_eq!(convex_hull(&two), two);
    }

    #[test]
    fn test_interior_and_edge_points_dropped() {
        let input = pts(&[
            [0, 0], [4, 0], [4, 4], [0, 4],
            [2, 2], [1, 3], // interior
            [2, 0], [4, 2], // on edges
        ]);
        let hull = convex_hull(&input);
        assert_eq!(hull, pts(&[[0, 0], [4, 0], [4, 4], [0, 4]]));
    }

    #[test]
    fn test_duplicates_collapse() {
        let input = pts(&[[0, 0], [0, 0], [3, 0], [3, 0], [0, 3], [0, 3]]);
        let hull = convex_hull(&input);
        assert_eq!(hull, pts(&[[0, 0], [3, 0], [0, 3]]));
    }

    #[test]
    fn test_repeated_points_appear_once() {
        let same = pts(&[[7, 7], [7, 7], [7, 7]]);
        assert_eq!(convex_hull(&same), pts(&[[7, 7]]));

        let pairs = pts(&[[2, 5], [-1, 0], [2, 5], [-1, 0]]);
        assert_eq!(convex_hull(&pairs), pts(&[[-1, 0], [2, 5]]));

        let mixed = pts(&[[4, 4], [0, 0], [4, 4], [4, 4]]);
        let hull = convex_hull(&mixed);
        let unique: HashSet<Point> = hull.iter().copied().collect();
        assert_eq!(unique.len(), hull.len(), "duplicated vertex in {:?}", hull);
    }

    #[test]
    fn test_counter_clockwise_order() {
        let input = pts(&[[-5, 1], [3, -4], [6, 2], [1, 7], [0, 0], [2, 1]]);
        let hull = convex_hull(&input);
        let n = hull.len();
        assert!(n >= 3);
        for i in 0..n {
            let turn = Turn::of(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]);
            assert_eq!(turn, Turn::CounterClockwise, "hull {:?} not strictly convex at {}", hull, i);
        }
    }

    #[test]
    fn test_input_is_not_modified() {
        let input = pts(&[[3, 3], [0, 0], [5, 1], [1, 4]]);
        let before = input.clone();
        let _ = convex_hull(&input);
        assert_eq!(input, before);
    }
}
