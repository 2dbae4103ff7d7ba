use tilegrid_core::Point;

/// Cost of one horizontal or vertical step.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of one diagonal step (integer stand-in for 10·√2).
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance scaled by [`STRAIGHT_COST`] and [`DIAGONAL_COST`].
///
/// A* uses this both as its heuristic and as the cost of a single step
/// between adjacent cells.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    DIAGONAL_COST * dx.min(dy) + STRAIGHT_COST * (dx - dy).abs()
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
