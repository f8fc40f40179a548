use gridway_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible as an A* estimate for 4-way movement when the minimum step
/// cost is 1.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
