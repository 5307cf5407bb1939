//! Definition of the [`ValidationResult`] type.

use serde::{Deserialize, Serialize};

use crate::types::zone::{Zone, ZoneType};

/// Message reported when no zone contains the project location.
pub const NOT_IN_ANY_ZONE: &str = "Project location is not within any defined zone";

/// Stand-in for a zone type name that could not be resolved.
pub const UNKNOWN_ZONE_TYPE: &str = "Unknown";

/// Outcome of validating a project location.
///
/// `valid == false` is an ordinary outcome, not an error; callers
/// display `message` and branch on `valid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,

    /// The first zone containing the location, if any.
    pub zone: Option<Zone>,

    /// The matched zone's type. `None` when no zone matched or the
    /// zone's `type_id` has no record.
    pub zone_type: Option<ZoneType>,
}

impl ValidationResult {
    /// The location is outside every zone.
    pub fn outside_all_zones() -> Self {
        ValidationResult {
            valid: false,
            message: NOT_IN_ANY_ZONE.to_string(),
            zone: None,
            zone_type: None,
        }
    }

    /// The location is inside `zone`; `compatible` is the verdict of
    /// the compatibility table for `project_type`.
    pub fn in_zone(
        zone: &Zone,
        zone_type: Option<&ZoneType>,
        project_type: &str,
        compatible: bool,
    ) -> Self {
        let zone_type_name = zone_type
            .map(|zone_type| zone_type.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_ZONE_TYPE);

        let message = if compatible {
            format!("Project is in {} zone - Compatible", zone_type_name)
        } else {
            format!(
                "Project type \"{}\" is not compatible with {} zone",
                project_type, zone_type_name
            )
        };

        ValidationResult {
            valid: compatible,
            message,
            zone: Some(zone.clone()),
            zone_type: zone_type.cloned(),
        }
    }
}
