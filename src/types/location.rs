//! Struct definitions and implementations for [`Point`] and [`LatLng`].
//!
//! Zone boundaries are stored in (longitude, latitude) order, the same
//! order GeoJSON rings use. Map widgets hand out (latitude, longitude)
//! pairs instead, so a map click arrives as a [`LatLng`] and becomes a
//! [`Point`] exactly once, through the `From` conversion below.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Point`] is a geographic coordinate in (longitude, latitude)
/// order. It is the only coordinate representation used internally.
///
/// Longitude is the horizontal (x) axis and latitude the vertical (y)
/// axis of the ray-casting test.
///
/// [`OrderedFloat`] makes points `Eq` and `Hash`, so records holding
/// them can be compared exactly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub longitude: OrderedFloat<f64>,
    pub latitude: OrderedFloat<f64>,
}

impl Point {
    /// Creates a point. Note the argument order: longitude first.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Point {
            longitude: OrderedFloat(longitude),
            latitude: OrderedFloat(latitude),
        }
    }

    pub fn x(&self) -> f64 {
        self.longitude.into_inner()
    }

    pub fn y(&self) -> f64 {
        self.latitude.into_inner()
    }
}

/// `[longitude, latitude]`, as found in GeoJSON coordinate arrays.
impl From<[f64; 2]> for Point {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Point::new(longitude, latitude)
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x(), point.y()]
    }
}

/// A coordinate as reported by a map, in (latitude, longitude) order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        LatLng {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }
}

impl From<LatLng> for Point {
    fn from(lat_lng: LatLng) -> Self {
        Point {
            longitude: lat_lng.longitude,
            latitude: lat_lng.latitude,
        }
    }
}

impl From<Point> for LatLng {
    fn from(point: Point) -> Self {
        LatLng {
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}
