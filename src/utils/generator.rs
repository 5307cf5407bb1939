//! Generates random points around a location.
//!
//! A testing aid, not part of the zoning checks: it samples many
//! locations at once to exercise zone containment.

use rand::Rng;

use crate::types::location::Point;
use crate::types::polygon::Polygon;

/// Generates `capacity` points uniformly distributed in the square of
/// half-side `radius` (in degrees) centred on `center`.
///
/// A radius that is not positive, or too large to sample from (NaN,
/// infinite, or overflowing once doubled), yields `capacity` copies of
/// `center`.
pub fn generate_points_near(center: &Point, radius: f64, capacity: usize) -> Vec<Point> {
    let mut rng = rand::thread_rng();
    generate_points_near_with(&mut rng, center, radius, capacity)
}

/// Same as [`generate_points_near`] with a caller-supplied generator,
/// so results can be reproduced from a seed.
pub fn generate_points_near_with(
    rng: &mut impl Rng,
    center: &Point,
    radius: f64,
    capacity: usize,
) -> Vec<Point> {
    if !radius.is_finite() || !(2.0 * radius).is_finite() || radius <= 0.0 {
        return vec![*center; capacity];
    }
    (0..capacity)
        .map(|_| {
            let dx = rng.gen_range(-radius..radius);
            let dy = rng.gen_range(-radius..radius);
            Point::new(center.x() + dx, center.y() + dy)
        })
        .collect()
}

/// Axis-aligned square polygon of half-side `radius` centred on
/// `center`.
pub fn square_around(center: &Point, radius: f64) -> Polygon {
    let (x, y) = (center.x(), center.y());
    Polygon::from(vec![
        [x - radius, y - radius],
        [x - radius, y + radius],
        [x + radius, y + radius],
        [x + radius, y - radius],
    ])
}
