//! Error type for the zoning library.
//!
//! Evaluation never fails; a point outside every zone or an unknown
//! project type is reported through
//! [`ValidationResult`](crate::types::validation::ValidationResult).
//! Errors only come from the configuration boundary, i.e. loading a
//! [`CompatibilityTable`](crate::types::compatibility::CompatibilityTable)
//! or parsing a [`ProjectType`](crate::types::compatibility::ProjectType).

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ZoningError>;

#[derive(Error, Debug)]
pub enum ZoningError {
    #[error("Failed to read compatibility table from {path}: {source}")]
    TableRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse compatibility table: {0}")]
    TableParse(#[from] serde_json::Error),

    #[error("Compatibility rule has an empty project type")]
    EmptyProjectType,

    #[error("Compatibility rule for \"{project_type}\" lists no zone types")]
    EmptyRule { project_type: String },

    #[error("Compatibility rule for \"{project_type}\" contains an empty zone type keyword")]
    EmptyKeyword { project_type: String },

    #[error("Duplicate compatibility rule for \"{project_type}\"")]
    DuplicateRule { project_type: String },

    #[error("Unknown project type: {0}")]
    UnknownProjectType(String),
}
