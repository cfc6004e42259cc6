//! Catalog configuration errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ValidationError};

/// Errors raised while loading, validating, or building the level catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to load catalog: {0}")]
    Load(#[from] config::ConfigError),

    #[error("duplicate program '{program}'")]
    DuplicateProgram { program: String },

    #[error("program '{program}' declares no levels")]
    EmptyProgram { program: String },

    #[error("duplicate level {number} in program '{program}'")]
    DuplicateLevel { program: String, number: i32 },

    #[error("level {number} in program '{program}' is negative and needs a short code")]
    MissingShortCode { program: String, number: i32 },

    #[error("equivalency references undefined level {program}-{number}")]
    UnknownLevel { program: String, number: i32 },

    #[error("equivalency from '{program}' targets the same program")]
    SelfEquivalency { program: String },

    #[error("invalid catalog value: {0}")]
    Invalid(#[from] ValidationError),

    #[error("catalog construction failed: {0}")]
    Build(#[from] DomainError),
}
