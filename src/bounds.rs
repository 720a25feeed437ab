/// Exclusive upper bound of the values drawn into the nested-loop arrays.
pub const ARRAY_VALUE_BOUND: i32 = 100;
/// Largest absolute coordinate of a generated point.
pub const COORDINATE_LIMIT: i32 = 1_000_000;

/// Inclusive integer range of the generated point coordinates.
pub const COORDINATE_BOUNDS: Bounds = Bounds::new(-COORDINATE_LIMIT, COORDINATE_LIMIT);

/// Closed interval `[min, max]` for one coordinate axis.
///
/// Both axes of a generated point set share the same bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: i32,
    pub max: i32,
}

impl Bounds {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}
