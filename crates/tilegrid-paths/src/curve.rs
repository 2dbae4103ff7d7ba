//! Grid cells along a cubic Bézier curve.

use tilegrid_core::{GridTopology, Point};

/// Control points of a curved path. `arc1` and `arc2` shape the curve and
/// may lie outside the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePath {
    pub source: Point,
    pub arc1: Point,
    pub arc2: Point,
    pub destination: Point,
    /// Samples per unit of control-polygon length.
    pub resolution: f32,
}

/// Cells crossed by the Bézier curve described by `curve`, in order of first
/// visit and without repeats. Samples round to the nearest cell, halves to
/// the even coordinate; samples that land outside the grid are skipped.
pub fn curved_path(topology: &GridTopology, curve: &CurvePath) -> Vec<usize> {
    let p1 = to_f32(curve.source);
    let p2 = to_f32(curve.arc1);
    let p3 = to_f32(curve.arc2);
    let p4 = to_f32(curve.destination);

    let length = distance(p1, p2) + distance(p2, p3) + distance(p3, p4);
    let samples = (length * curve.resolution).ceil().max(0.0) as usize;

    let mut points = Vec::with_capacity(samples + 2);
    points.push(p1);
    for i in 1..samples {
        points.push(bezier(i as f32 / samples as f32, p1, p2, p3, p4));
    }
    points.push(p4);

    let mut visited = vec![false; topology.cell_count()];
    let mut path = Vec::new();
    for (x, y) in points {
        let cell = Point::new(x.round_ties_even() as i32, y.round_ties_even() as i32);
        if !topology.in_bounds(cell) {
            continue;
        }
        let index = topology.index_of(cell);
        if !visited[index] {
            visited[index] = true;
            path.push(index);
        }
    }

    log::debug!(
        "curved path {} -> {}: {samples} samples, {} cells",
        curve.source,
        curve.destination,
        path.len()
    );
    path
}

#[inline]
fn to_f32(p: Point) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

#[inline]
fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

fn bezier(t: f32, p1: (f32, f32), p2: (f32, f32), p3: (f32, f32), p4: (f32, f32)) -> (f32, f32) {
    let u = 1.0 - t;
    let w1 = u * u * u;
    let w2 = 3.0 * u * u * t;
    let w3 = 3.0 * u * t * t;
    let w4 = t * t * t;
    (
        w1 * p1.0 + w2 * p2.0 + w3 * p3.0 + w4 * p4.0,
        w1 * p1.1 + w2 * p2.1 + w3 * p3.1 + w4 * p4.1,
    )
}
