//! Helper functions for looking up zoning records.

use crate::types::location::Point;
use crate::types::zone::{Zone, ZoneType};

/// Finds the zone containing `point`.
///
/// Zones are tested in input order and the first match wins, so when
/// zones overlap the caller's ordering decides. Zones without a
/// polygon are skipped.
///
/// # Arguments
/// * `zones` - Candidate zones.
/// * `point` - Query location in (longitude, latitude) order.
///
/// # Returns
/// The first containing zone, or [`None`] if no zone contains the
/// point or `zones` is empty.
///
/// # Time Complexity
/// *O*(*v*) in the total number of polygon vertices.
pub fn find_containing_zone<'a>(zones: &'a [Zone], point: &Point) -> Option<&'a Zone> {
    let zone = zones.iter().find(|zone| zone.contains(point));
    match zone {
        Some(zone) => debug!("Point {:?} is in zone {}", point, zone.id),
        None => debug!("Point {:?} is not in any of {} zones", point, zones.len()),
    }
    zone
}

/// Finds a zone type by identifier with a linear scan.
pub fn find_zone_type<'a>(zone_types: &'a [ZoneType], type_id: &str) -> Option<&'a ZoneType> {
    zone_types.iter().find(|zone_type| zone_type.id == type_id)
}

#[cfg(test)]
mod resolver_tests {
    use super::*;
    use crate::types::polygon::Polygon;

    fn square(id: &str, min: f64, max: f64) -> Zone {
        Zone {
            id: id.to_string(),
            name: format!("Zone {}", id),
            type_id: "t1".to_string(),
            polygon: Some(Polygon::from(vec![
                [min, min],
                [min, max],
                [max, max],
                [max, min],
            ])),
            area: None,
            description: None,
        }
    }

    #[test]
    fn test_first_match_wins() {
        let zones = vec![square("a", 0.0, 2.0), square("b", 1.0, 3.0)];
        let point = Point::new(1.5, 1.5);

        assert_eq!(find_containing_zone(&zones, &point).unwrap().id, "a");

        let reversed = vec![square("b", 1.0, 3.0), square("a", 0.0, 2.0)];
        assert_eq!(find_containing_zone(&reversed, &point).unwrap().id, "b");
    }

    #[test]
    fn test_skips_zones_without_polygon() {
        let mut unbounded = square("a", 0.0, 2.0);
        unbounded.polygon = None;
        let zones = vec![unbounded, square("b", 0.0, 2.0)];

        assert_eq!(
            find_containing_zone(&zones, &Point::new(1.0, 1.0)).unwrap().id,
            "b"
        );
    }

    #[test]
    fn test_no_zones() {
        assert!(find_containing_zone(&[], &Point::new(0.0, 0.0)).is_none());
        assert!(find_containing_zone(&[], &Point::new(-122.4194, 37.7749)).is_none());
    }

    #[test]
    fn test_point_outside_every_zone() {
        let zones = vec![square("a", 0.0, 1.0), square("b", 2.0, 3.0)];
        assert!(find_containing_zone(&zones, &Point::new(1.5, 1.5)).is_none());
    }

    #[test]
    fn test_find_zone_type() {
        let zone_types = vec![
            ZoneType {
                id: "t1".to_string(),
                name: "Residential".to_string(),
            },
            ZoneType {
                id: "t2".to_string(),
                name: "Commercial".to_string(),
            },
        ];
        assert_eq!(find_zone_type(&zone_types, "t2").unwrap().name, "Commercial");
        assert!(find_zone_type(&zone_types, "t9").is_none());
        assert!(find_zone_type(&[], "t1").is_none());
    }
}
