//! LevelRegistry - ordered catalog of levels per program.

use std::collections::BTreeMap;

use crate::domain::foundation::{ProgramCode, ValidationError};

use super::Level;

/// Immutable catalog of every `(program, level)` pair the institution
/// defines.
///
/// Built once from configuration and shared read-only across services;
/// unknown programs and numbers are answered with empty/`None` values,
/// never errors.
#[derive(Debug, Clone)]
pub struct LevelRegistry {
    programs: BTreeMap<ProgramCode, Vec<Level>>,
}

impl LevelRegistry {
    /// Builds a registry from a flat list of levels.
    ///
    /// Levels are grouped by program and ordered by number (negative
    /// sub-beginner levels first).
    ///
    /// # Errors
    ///
    /// Rejects duplicate `(program, number)` pairs.
    pub fn from_levels(levels: impl IntoIterator<Item = Level>) -> Result<Self, ValidationError> {
        let mut programs: BTreeMap<ProgramCode, Vec<Level>> = BTreeMap::new();

        for level in levels {
            let entries = programs.entry(level.program().clone()).or_default();
            if entries.iter().any(|l| l.number() == level.number()) {
                return Err(ValidationError::invalid_format(
                    "levels",
                    format!("duplicate level {} in program {}", level.number(), level.program()),
                ));
            }
            entries.push(level);
        }

        for entries in programs.values_mut() {
            entries.sort_by_key(Level::number);
        }

        Ok(Self { programs })
    }

    /// All levels of a program in ascending order.
    ///
    /// Unknown programs yield an empty slice.
    pub fn levels_for_program(&self, program: &ProgramCode) -> &[Level] {
        self.programs.get(program).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Looks up one level by program and number.
    pub fn level(&self, program: &ProgramCode, number: i32) -> Option<&Level> {
        self.levels_for_program(program)
            .iter()
            .find(|l| l.number() == number)
    }

    /// The sequential successor of a level within its own program.
    ///
    /// Returns `None` at the highest defined level - the caller decides
    /// what "terminal" means (program completion, not promotion).
    pub fn next_level(&self, level: &Level) -> Option<&Level> {
        let levels = self.levels_for_program(level.program());
        let position = levels.iter().position(|l| l.number() == level.number())?;
        levels.get(position + 1)
    }

    /// Iterator over all defined program codes.
    pub fn programs(&self) -> impl Iterator<Item = &ProgramCode> {
        self.programs.keys()
    }

    /// Iterator over every level in the catalog.
    pub fn all_levels(&self) -> impl Iterator<Item = &Level> {
        self.programs.values().flatten()
    }
}
