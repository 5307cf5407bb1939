//! The core of the zoning library.
//!
//! The engine resolves which zone contains a project location, looks
//! up that zone's type and checks the project type against a
//! [`CompatibilityTable`](crate::types::compatibility::CompatibilityTable). Every step is a pure function of its inputs;
//! identical calls produce identical results.

use once_cell::sync::Lazy;

use crate::types::compatibility::DEFAULT_TABLE;
use crate::types::location::Point;
use crate::types::validation::ValidationResult;
use crate::types::zone::{Zone, ZoneType};

/// The validator engine module.
pub mod engine {
    use crate::{
        types::{
            compatibility::CompatibilityTable,
            location::{LatLng, Point},
            validation::ValidationResult,
            zone::{Zone, ZoneType},
        },
        utils::resolver::{find_containing_zone, find_zone_type},
    };

    /// A Validator owns the compatibility table it evaluates against.
    /// The table cannot be changed after construction.
    #[derive(Debug, Clone, Default)]
    pub struct Validator {
        table: CompatibilityTable,
    }

    impl Validator {
        /// Creates a validator using an injected table.
        pub fn new(table: CompatibilityTable) -> Self {
            Validator { table }
        }

        pub fn table(&self) -> &CompatibilityTable {
            &self.table
        }

        /// Returns true iff `zone_type_name` contains, ignoring case,
        /// one of the keywords listed for `project_type`.
        pub fn evaluate_compatibility(&self, project_type: &str, zone_type_name: &str) -> bool {
            self.table.is_compatible(project_type, zone_type_name)
        }

        /// Validates a project location.
        ///
        /// # Arguments
        /// * `zones` - Candidate zones. The first one containing `point`
        ///   is used.
        /// * `zone_types` - Zone type records, looked up by the matched
        ///   zone's `type_id`.
        /// * `point` - Project location in (longitude, latitude) order.
        /// * `project_type` - Declared project type label.
        ///
        /// # Returns
        /// A [`ValidationResult`]. A location outside every zone, an
        /// unknown project type and a missing zone type record all
        /// produce `valid == false` rather than an error.
        pub fn validate(
            &self,
            zones: &[Zone],
            zone_types: &[ZoneType],
            point: &Point,
            project_type: &str,
        ) -> ValidationResult {
            debug!("Validating {:?} project at {:?}", project_type, point);
            let zone = match find_containing_zone(zones, point) {
                Some(zone) => zone,
                None => return ValidationResult::outside_all_zones(),
            };

            let zone_type = find_zone_type(zone_types, &zone.type_id);
            if zone_type.is_none() {
                warn!(
                    "Zone {} references missing zone type {}",
                    zone.id, zone.type_id
                );
            }
            let zone_type_name = zone_type.map_or("", |zone_type| zone_type.name.as_str());

            let compatible = self.evaluate_compatibility(project_type, zone_type_name);
            debug!(
                "{:?} project in {:?} zone compatible: {}",
                project_type, zone_type_name, compatible
            );
            ValidationResult::in_zone(zone, zone_type, project_type, compatible)
        }

        /// Validates a location picked on a map, given in (latitude,
        /// longitude) order.
        pub fn validate_lat_lng(
            &self,
            zones: &[Zone],
            zone_types: &[ZoneType],
            lat_lng: LatLng,
            project_type: &str,
        ) -> ValidationResult {
            self.validate(zones, zone_types, &Point::from(lat_lng), project_type)
        }

        /// Zone types, in input order, that `project_type` may be
        /// placed in.
        pub fn compatible_zone_types<'a>(
            &self,
            zone_types: &'a [ZoneType],
            project_type: &str,
        ) -> Vec<&'a ZoneType> {
            self.table.compatible_zone_types(project_type, zone_types)
        }
    }
}

/// Validator over the default table, shared by [`validate`].
static DEFAULT_VALIDATOR: Lazy<engine::Validator> = Lazy::new(engine::Validator::default);

/// [`engine::Validator::evaluate_compatibility`] against the default
/// table.
pub fn evaluate_compatibility(project_type: &str, zone_type_name: &str) -> bool {
    DEFAULT_TABLE.is_compatible(project_type, zone_type_name)
}

/// [`engine::Validator::validate`] against the default table.
pub fn validate(
    zones: &[Zone],
    zone_types: &[ZoneType],
    point: &Point,
    project_type: &str,
) -> ValidationResult {
    DEFAULT_VALIDATOR.validate(zones, zone_types, point, project_type)
}

#[cfg(test)]
mod validator_tests {
    use super::engine::Validator;
    use super::*;
    use crate::types::compatibility::{CompatibilityRule, CompatibilityTable};
    use crate::types::location::LatLng;
    use crate::types::polygon::Polygon;

    /// Two city blocks in San Francisco, in (longitude, latitude) order.
    fn zones() -> Vec<Zone> {
        vec![
            Zone {
                id: "z1".to_string(),
                name: "Hayes Valley".to_string(),
                type_id: "t1".to_string(),
                polygon: Some(Polygon::from(vec![
                    [-122.430, 37.774],
                    [-122.430, 37.778],
                    [-122.420, 37.778],
                    [-122.420, 37.774],
                ])),
                area: Some("0.4 km2".to_string()),
                description: None,
            },
            Zone {
                id: "z2".to_string(),
                name: "Dogpatch".to_string(),
                type_id: "t2".to_string(),
                polygon: Some(Polygon::from(vec![
                    [-122.392, 37.755],
                    [-122.392, 37.762],
                    [-122.384, 37.762],
                    [-122.384, 37.755],
                ])),
                area: None,
                description: Some("Former shipyard district".to_string()),
            },
        ]
    }

    fn zone_types() -> Vec<ZoneType> {
        vec![
            ZoneType {
                id: "t1".to_string(),
                name: "Residential".to_string(),
            },
            ZoneType {
                id: "t2".to_string(),
                name: "Light Industrial".to_string(),
            },
        ]
    }

    #[test]
    fn test_compatible_project() {
        let result = validate(
            &zones(),
            &zone_types(),
            &Point::new(-122.425, 37.776),
            "Residential",
        );
        assert!(result.valid);
        assert_eq!(result.message, "Project is in Residential zone - Compatible");
        assert_eq!(result.zone.unwrap().id, "z1");
        assert_eq!(result.zone_type.unwrap().id, "t1");
    }

    #[test]
    fn test_incompatible_project() {
        let result = validate(
            &zones(),
            &zone_types(),
            &Point::new(-122.388, 37.758),
            "Residential",
        );
        assert!(!result.valid);
        assert_eq!(
            result.message,
            "Project type \"Residential\" is not compatible with Light Industrial zone"
        );
        assert_eq!(result.zone.unwrap().id, "z2");
    }

    #[test]
    fn test_missing_zone_type_reads_unknown() {
        let result = validate(
            &zones(),
            &zone_types()[..1],
            &Point::new(-122.388, 37.758),
            "Industrial",
        );
        assert!(!result.valid);
        assert_eq!(
            result.message,
            "Project type \"Industrial\" is not compatible with Unknown zone"
        );
        assert_eq!(result.zone.unwrap().id, "z2");
        assert_eq!(result.zone_type, None);
    }

    #[test]
    fn test_unknown_project_type_in_zone() {
        let result = validate(
            &zones(),
            &zone_types(),
            &Point::new(-122.425, 37.776),
            "Spaceport",
        );
        assert!(!result.valid);
        assert_eq!(result.zone_type.unwrap().name, "Residential");
    }

    /// A map click arrives latitude first; feeding it in unconverted
    /// would land nowhere near San Francisco.
    #[test]
    fn test_validate_lat_lng() {
        let validator = Validator::default();
        let clicked = LatLng::new(37.776, -122.425);

        let result = validator.validate_lat_lng(&zones(), &zone_types(), clicked, "Mixed Use");
        assert!(result.valid);
        assert_eq!(result.zone.unwrap().id, "z1");

        let swapped = Point::new(37.776, -122.425);
        let result = validator.validate(&zones(), &zone_types(), &swapped, "Mixed Use");
        assert_eq!(result, ValidationResult::outside_all_zones());
    }

    #[test]
    fn test_injected_table() {
        let table = CompatibilityTable::new(vec![CompatibilityRule {
            project_type: "Brewery".to_string(),
            compatible_zone_types: vec!["Industrial".to_string()],
        }])
        .unwrap();
        let validator = Validator::new(table);

        let in_dogpatch = Point::new(-122.388, 37.758);
        assert!(validator.validate(&zones(), &zone_types(), &in_dogpatch, "Brewery").valid);
        assert!(!validator.validate(&zones(), &zone_types(), &in_dogpatch, "Industrial").valid);
        assert!(validator.evaluate_compatibility("Brewery", "Heavy Industrial"));
        assert!(!evaluate_compatibility("Brewery", "Heavy Industrial"));
        assert_eq!(validator.table().rules().len(), 1);
    }

    #[test]
    fn test_compatible_zone_types() {
        let validator = Validator::default();
        let zone_types = zone_types();
        let names: Vec<&str> = validator
            .compatible_zone_types(&zone_types, "Industrial")
            .iter()
            .map(|zone_type| zone_type.name.as_str())
            .collect();
        assert_eq!(names, vec!["Light Industrial"]);
    }

    #[test]
    fn test_free_validate_uses_default_table() {
        assert_eq!(DEFAULT_VALIDATOR.table(), &*DEFAULT_TABLE);
        let point = Point::new(-122.425, 37.776);
        assert_eq!(
            validate(&zones(), &zone_types(), &point, "Residential"),
            Validator::default().validate(&zones(), &zone_types(), &point, "Residential")
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let point = Point::new(-122.388, 37.758);
        let first = validate(&zones(), &zone_types(), &point, "Commercial");
        let second = validate(&zones(), &zone_types(), &point, "Commercial");
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
