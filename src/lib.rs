//! Zone Containment and Compatibility Library.
//! Decides which zoning polygon a project location falls in and whether
//! the declared project type is permitted there.

#[macro_use]
extern crate log;

pub mod error;

pub mod types {
    pub mod compatibility;
    pub mod location;
    pub mod polygon;
    pub mod validation;
    pub mod validator;
    pub mod zone;
}

pub mod algorithms {
    pub mod point_in_polygon;
}

pub mod utils {
    pub mod generator;
    pub mod resolver;
}

pub use error::{Result, ZoningError};
pub use types::compatibility::{CompatibilityRule, CompatibilityTable, ProjectType};
pub use types::location::{LatLng, Point};
pub use types::polygon::Polygon;
pub use types::validation::ValidationResult;
pub use types::validator::{engine::Validator, evaluate_compatibility, validate};
pub use types::zone::{Zone, ZoneType};
pub use utils::resolver::{find_containing_zone, find_zone_type};
