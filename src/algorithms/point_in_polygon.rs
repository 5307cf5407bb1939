//! Ray-casting (even-odd rule) point-in-polygon test.
//!
//! A horizontal ray is cast from the query point towards positive x
//! and every ring edge it crosses toggles the result. The ring is
//! implicitly closed: the last vertex connects back to the first.
//!
//! Points lying exactly on an edge get whatever the arithmetic yields;
//! there is no boundary tolerance.

use crate::types::location::Point;

/// Fewer vertices than this enclose no area.
pub const MIN_VERTICES: usize = 3;

/// Returns true if `point` lies inside the ring described by `vertices`.
///
/// Rings with fewer than [`MIN_VERTICES`] vertices contain nothing.
/// Horizontal edges never count as a crossing because their y-range
/// cannot straddle the query point.
///
/// # Time Complexity
/// *O*(*n*) in the number of vertices.
pub fn contains(vertices: &[Point], point: &Point) -> bool {
    let n = vertices.len();
    if n < MIN_VERTICES {
        return false;
    }

    let (x, y) = (point.x(), point.y());
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (vertices[i].x(), vertices[i].y());
        let (xj, yj) = (vertices[j].x(), vertices[j].y());
        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }
    inside
}
