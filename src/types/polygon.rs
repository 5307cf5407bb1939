//! Definition of the [`Polygon`] type, the boundary of a zone.

use serde::{Deserialize, Serialize};

use crate::algorithms::point_in_polygon::{self, MIN_VERTICES};
use crate::types::location::Point;

/// An ordered ring of [`Point`]s. The last vertex is implicitly
/// connected back to the first, so a closing vertex is optional.
///
/// Serialized as a GeoJSON-style array of `[longitude, latitude]`
/// pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Polygon { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A ring needs at least three vertices to enclose anything.
    pub fn has_area(&self) -> bool {
        self.vertices.len() >= MIN_VERTICES
    }

    /// Ray-casting containment test.
    ///
    /// See [`point_in_polygon::contains`].
    pub fn contains(&self, point: &Point) -> bool {
        point_in_polygon::contains(&self.vertices, point)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Polygon::new(iter.into_iter().collect())
    }
}

impl From<Vec<[f64; 2]>> for Polygon {
    fn from(coordinates: Vec<[f64; 2]>) -> Self {
        coordinates.into_iter().map(Point::from).collect()
    }
}

impl From<Polygon> for Vec<[f64; 2]> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices.into_iter().map(<[f64; 2]>::from).collect()
    }
}
