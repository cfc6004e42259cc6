//! EquivalencyResolver - cross-program level equivalency lookups.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, ProgramCode};

use super::{Level, LevelRegistry};

/// A declared equivalency: completing `(program, level)` is equivalent to
/// one or more levels of another program.
///
/// One intensive level may compress several standard levels, so `to_levels`
/// is a set. Declaring one direction is enough - the resolver mirrors the
/// reverse edges at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalencyEdge {
    pub program: ProgramCode,
    pub level: i32,
    pub to_program: ProgramCode,
    pub to_levels: BTreeSet<i32>,
}

/// Answers "which levels in program B match level X of program A" and
/// "can a student at level X transfer into (B, Y)".
///
/// Equivalency is a sparse relation kept as a lookup table, not a formula:
/// intensive programs compress multiple standard levels into one, and two
/// programs with no declared relationship simply resolve to the empty set.
#[derive(Debug, Clone)]
pub struct EquivalencyResolver {
    registry: Arc<LevelRegistry>,
    edges: HashMap<(ProgramCode, i32), HashMap<ProgramCode, BTreeSet<i32>>>,
}

impl EquivalencyResolver {
    /// Builds the resolver from declared edges.
    ///
    /// Every edge is inserted in both directions, so the symmetry law
    /// (A ~ B implies B ~ A) holds by construction.
    ///
    /// # Errors
    ///
    /// - `LevelNotFound` when an edge references a level the registry does
    ///   not define.
    /// - `ValidationFailed` when an edge targets its own program.
    pub fn from_edges(
        registry: Arc<LevelRegistry>,
        declared: impl IntoIterator<Item = EquivalencyEdge>,
    ) -> Result<Self, DomainError> {
        let mut edges: HashMap<(ProgramCode, i32), HashMap<ProgramCode, BTreeSet<i32>>> =
            HashMap::new();

        for edge in declared {
            if edge.program == edge.to_program {
                return Err(DomainError::new(
                    ErrorCode::ValidationFailed,
                    "equivalency cannot target its own program",
                )
                .with_detail("program", edge.program.as_str()));
            }
            Self::require_level(&registry, &edge.program, edge.level)?;

            for &to_number in &edge.to_levels {
                Self::require_level(&registry, &edge.to_program, to_number)?;

                edges
                    .entry((edge.program.clone(), edge.level))
                    .or_default()
                    .entry(edge.to_program.clone())
                    .or_default()
                    .insert(to_number);

                // Mirror so reverse queries resolve back.
                edges
                    .entry((edge.to_program.clone(), to_number))
                    .or_default()
                    .entry(edge.program.clone())
                    .or_default()
                    .insert(edge.level);
            }
        }

        Ok(Self { registry, edges })
    }

    fn require_level(
        registry: &LevelRegistry,
        program: &ProgramCode,
        number: i32,
    ) -> Result<(), DomainError> {
        if registry.level(program, number).is_none() {
            return Err(DomainError::new(
                ErrorCode::LevelNotFound,
                format!("equivalency references undefined level {}-{}", program, number),
            ));
        }
        Ok(())
    }

    /// The registry this resolver was built over.
    pub fn registry(&self) -> &Arc<LevelRegistry> {
        &self.registry
    }

    /// Levels of `target_program` equivalent to `level`, in ascending order.
    ///
    /// Empty when no edge is declared between the two programs - a normal
    /// outcome, not an error.
    pub fn equivalent_levels(&self, level: &Level, target_program: &ProgramCode) -> Vec<&Level> {
        let Some(targets) = self
            .edges
            .get(&(level.program().clone(), level.number()))
            .and_then(|by_program| by_program.get(target_program))
        else {
            return Vec::new();
        };

        targets
            .iter()
            .filter_map(|&number| self.registry.level(target_program, number))
            .collect()
    }

    /// Whether a student at `level` may transfer into
    /// `(target_program, target_number)`.
    ///
    /// Equivalency only spans programs: a "transfer" to another level of
    /// the same program is always false.
    pub fn can_transfer_to(
        &self,
        level: &Level,
        target_program: &ProgramCode,
        target_number: i32,
    ) -> bool {
        if level.program() == target_program {
            return false;
        }
        self.equivalent_levels(level, target_program)
            .iter()
            .any(|l| l.number() == target_number)
    }
}
