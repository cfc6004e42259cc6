//! Catalog configuration module
//!
//! Type-safe loading of the level/equivalency catalog using the `config`
//! crate. The catalog can come from a file named by the
//! `PROGRESSION_CATALOG` environment variable or from the built-in
//! default; either way it is validated and then frozen into the immutable
//! runtime registry and resolver.

mod catalog;
mod error;

pub use catalog::{CatalogConfig, EquivalencyDef, LevelDef, ProgramDef, CATALOG_FILE_ENV};
pub use error::CatalogError;
