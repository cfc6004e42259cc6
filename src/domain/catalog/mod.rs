//! Catalog module - levels and cross-program equivalencies.
//!
//! The catalog is process-wide static configuration: loaded once, shared
//! read-only (`Arc`), and never mutated at runtime.

mod equivalency;
mod level;
mod registry;

pub use equivalency::{EquivalencyEdge, EquivalencyResolver};
pub use level::Level;
pub use registry::LevelRegistry;
