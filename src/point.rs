use serde::Serialize;

/// An integer point in the plane.
///
/// Ordering is lexicographic by `x` then `y`, which is the sort order the
/// monotone chain needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point {
    fn from(p: [i32; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }
}

impl From<Point> for [i32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Cross product of `b - a` and `c - a`.
///
/// Computed in `i64`: coordinate differences reach 2·10^6, so each product
/// can reach 4·10^12.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> i64 {
    let abx = b.x as i64 - a.x as i64;
    let aby = b.y as i64 - a.y as i64;
    let acx = c.x as i64 - a.x as i64;
    let acy = c.y as i64 - a.y as i64;
    abx * acy - aby * acx
}

/// Direction of the turn `a -> b -> c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Turn {
    pub fn from_cross(value: i64) -> Self {
        match value.signum() {
            1 => Turn::CounterClockwise,
            -1 => Turn::Clockwise,
            _ => Turn::Collinear,
        }
    }

    pub fn of(a: Point, b: Point, c: Point) -> Self {
        Self::from_cross(cross(a, b, c))
    }
}
