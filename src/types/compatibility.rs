//! Project-type to zone-type compatibility rules.
//!
//! A [`CompatibilityTable`] maps each recognised project type to a list
//! of zone type name keywords. A project is compatible with a zone when
//! the zone type's name contains one of those keywords, compared
//! case-insensitively.
//!
//! The table is immutable once built. [`CompatibilityTable::default`]
//! returns the municipal policy table; other tables can be injected
//! through [`Validator::new`](crate::types::validator::engine::Validator::new),
//! for example after loading one from JSON with
//! [`CompatibilityTable::from_path`].

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoningError};
use crate::types::zone::ZoneType;

/// The project types recognised by the default table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ProjectType {
    Residential,
    Commercial,
    Industrial,
    Agricultural,
    MixedUse,
    Institutional,
    Recreational,
}

impl ProjectType {
    pub const ALL: [ProjectType; 7] = [
        ProjectType::Residential,
        ProjectType::Commercial,
        ProjectType::Industrial,
        ProjectType::Agricultural,
        ProjectType::MixedUse,
        ProjectType::Institutional,
        ProjectType::Recreational,
    ];

    /// The label used in forms and as the table key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
            ProjectType::Industrial => "Industrial",
            ProjectType::Agricultural => "Agricultural",
            ProjectType::MixedUse => "Mixed Use",
            ProjectType::Institutional => "Institutional",
            ProjectType::Recreational => "Recreational",
        }
    }

    /// Zone type keywords this project type is compatible with under
    /// the default policy.
    fn default_keywords(&self) -> &'static [&'static str] {
        match self {
            ProjectType::Residential => &["Residential", "Mixed Use"],
            ProjectType::Commercial => &["Commercial", "Mixed Use", "Business"],
            ProjectType::Industrial => &["Industrial", "Manufacturing"],
            ProjectType::Agricultural => &["Agricultural", "Rural"],
            ProjectType::MixedUse => &["Mixed Use", "Residential", "Commercial"],
            ProjectType::Institutional => &["Institutional", "Public", "Mixed Use"],
            ProjectType::Recreational => &["Recreational", "Open Space", "Mixed Use"],
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = ZoningError;

    /// Labels are matched exactly, as they are by the table lookup.
    fn from_str(s: &str) -> Result<Self> {
        ProjectType::ALL
            .iter()
            .find(|project_type| project_type.as_str() == s)
            .copied()
            .ok_or_else(|| ZoningError::UnknownProjectType(s.to_string()))
    }
}

/// One row of a [`CompatibilityTable`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompatibilityRule {
    pub project_type: String,
    pub compatible_zone_types: Vec<String>,
}

impl CompatibilityRule {
    /// Returns true if `zone_type_name` contains any of the rule's
    /// keywords, ignoring case.
    pub fn matches(&self, zone_type_name: &str) -> bool {
        if zone_type_name.is_empty() {
            return false;
        }
        let name = zone_type_name.to_lowercase();
        self.compatible_zone_types
            .iter()
            .any(|keyword| name.contains(&keyword.to_lowercase()))
    }
}

/// Immutable set of compatibility rules keyed by project type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompatibilityTable {
    rules: Vec<CompatibilityRule>,
}

/// The municipal policy table, built on first use.
pub static DEFAULT_TABLE: Lazy<CompatibilityTable> = Lazy::new(|| CompatibilityTable {
    rules: ProjectType::ALL
        .iter()
        .map(|project_type| CompatibilityRule {
            project_type: project_type.as_str().to_string(),
            compatible_zone_types: project_type
                .default_keywords()
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
        })
        .collect(),
});

impl Default for CompatibilityTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

impl CompatibilityTable {
    /// Builds a table from rules.
    ///
    /// # Errors
    /// Rejects rules with an empty project type, an empty keyword list,
    /// an empty keyword (it would match every zone type) and repeated
    /// project types.
    pub fn new(rules: Vec<CompatibilityRule>) -> Result<Self> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if rule.project_type.is_empty() {
                return Err(ZoningError::EmptyProjectType);
            }
            if rule.compatible_zone_types.is_empty() {
                return Err(ZoningError::EmptyRule {
                    project_type: rule.project_type.clone(),
                });
            }
            if rule.compatible_zone_types.iter().any(|k| k.is_empty()) {
                return Err(ZoningError::EmptyKeyword {
                    project_type: rule.project_type.clone(),
                });
            }
            if !seen.insert(rule.project_type.as_str()) {
                return Err(ZoningError::DuplicateRule {
                    project_type: rule.project_type.clone(),
                });
            }
        }
        debug!("Built compatibility table with {} rules", rules.len());
        Ok(CompatibilityTable { rules })
    }

    /// Parses a JSON array of rules:
    ///
    /// ```json
    /// [{ "project_type": "Residential", "compatible_zone_types": ["Residential", "Mixed Use"] }]
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rules: Vec<CompatibilityRule> = serde_json::from_str(json)?;
        CompatibilityTable::new(rules)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let rules: Vec<CompatibilityRule> = serde_json::from_reader(reader)?;
        CompatibilityTable::new(rules)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading compatibility table from {}", path.display());
        let file = File::open(path).map_err(|source| ZoningError::TableRead {
            path: path.to_path_buf(),
            source,
        })?;
        CompatibilityTable::from_reader(BufReader::new(file))
    }

    pub fn rules(&self) -> &[CompatibilityRule] {
        &self.rules
    }

    /// Looks up the rule for a project type. The label must match
    /// exactly.
    pub fn rule(&self, project_type: &str) -> Option<&CompatibilityRule> {
        self.rules
            .iter()
            .find(|rule| rule.project_type == project_type)
    }

    pub fn project_types(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.project_type.as_str())
    }

    /// Returns true iff `project_type` has a rule and `zone_type_name`
    /// contains one of its keywords. Empty inputs and unknown project
    /// types are never compatible.
    pub fn is_compatible(&self, project_type: &str, zone_type_name: &str) -> bool {
        if project_type.is_empty() || zone_type_name.is_empty() {
            return false;
        }
        match self.rule(project_type) {
            Some(rule) => rule.matches(zone_type_name),
            None => {
                debug!("No compatibility rule for project type {:?}", project_type);
                false
            }
        }
    }

    /// Lists the zone types, in input order, that `project_type` may be
    /// placed in.
    pub fn compatible_zone_types<'a>(
        &self,
        project_type: &str,
        zone_types: &'a [ZoneType],
    ) -> Vec<&'a ZoneType> {
        zone_types
            .iter()
            .filter(|zone_type| self.is_compatible(project_type, &zone_type.name))
            .collect()
    }
}
