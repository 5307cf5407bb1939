//! Struct definitions for zoning records.
//!
//! A [`Zone`] is a designated geographic area. Its land-use
//! classification lives in a separate [`ZoneType`] record and is
//! referenced by identifier, the same way the records are stored by
//! the data source that supplies them.

use serde::{Deserialize, Serialize};

use crate::types::location::Point;
use crate::types::polygon::Polygon;

/// Land-use classification, e.g. "Residential" or "Mixed Use".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneType {
    pub id: String,

    /// Display name. Compatibility rules match against this name.
    pub name: String,
}

/// A zoning area.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,

    /// Identifier of the [`ZoneType`] this zone is classified as.
    pub type_id: String,

    /// Boundary of the zone. A zone without one has no spatial extent
    /// and never contains a point.
    #[serde(default)]
    pub polygon: Option<Polygon>,

    /// Free-text area, display only.
    #[serde(default)]
    pub area: Option<String>,

    /// Free-text description, display only.
    #[serde(default)]
    pub description: Option<String>,
}

impl Zone {
    /// Returns true if the zone has a boundary and `point` lies inside
    /// it.
    pub fn contains(&self, point: &Point) -> bool {
        self.polygon
            .as_ref()
            .map_or(false, |polygon| polygon.contains(point))
    }
}
