//! Declarative level catalog configuration.
//!
//! The registry and equivalency table are data, not code: institutions
//! add programs and levels by editing a catalog file, not the engine.
//! A built-in default catalog covers the standard language programs.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{EquivalencyEdge, EquivalencyResolver, Level, LevelRegistry};
use crate::domain::foundation::ProgramCode;

use super::CatalogError;

/// Environment variable pointing at a catalog file override.
pub const CATALOG_FILE_ENV: &str = "PROGRESSION_CATALOG";

/// One level of a program, as configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub number: i32,
    pub name: String,
    /// Literal course-code suffix for named sub-levels, e.g. `PRE`.
    #[serde(default)]
    pub short_code: Option<String>,
}

/// One program and its level sequence, as configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDef {
    pub code: String,
    pub name: String,
    pub levels: Vec<LevelDef>,
}

/// One declared equivalency edge, as configured.
///
/// Declaring one direction is enough; the resolver mirrors the reverse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquivalencyDef {
    pub program: String,
    pub level: i32,
    pub to_program: String,
    pub to_levels: Vec<i32>,
}

/// Complete catalog definition: programs, levels, and equivalencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub programs: Vec<ProgramDef>,
    #[serde(default)]
    pub equivalencies: Vec<EquivalencyDef>,
}

impl CatalogConfig {
    /// The built-in catalog: EHSS, GESL, IEAP (with PRE/BEG sub-beginner
    /// levels), and the Weekend Express track, plus the standard
    /// equivalencies between them.
    pub fn builtin() -> Self {
        let numeric = |prefix: &str, count: i32| -> Vec<LevelDef> {
            (1..=count)
                .map(|n| LevelDef {
                    number: n,
                    name: format!("{} Level {}", prefix, n),
                    short_code: None,
                })
                .collect()
        };

        let mut ieap_levels = vec![
            LevelDef {
                number: -2,
                name: "IEAP Pre-Beginner".to_string(),
                short_code: Some("PRE".to_string()),
            },
            LevelDef {
                number: -1,
                name: "IEAP Beginner".to_string(),
                short_code: Some("BEG".to_string()),
            },
        ];
        ieap_levels.extend(numeric("IEAP", 4));

        let mut equivalencies = Vec::new();
        // GESL and EHSS run in parity, level for level.
        for n in 1..=12 {
            equivalencies.push(EquivalencyDef {
                program: "GESL".to_string(),
                level: n,
                to_program: "EHSS".to_string(),
                to_levels: vec![n],
            });
        }
        // One intensive IEAP level compresses three standard levels.
        for n in 1..=4 {
            let span = vec![3 * n - 2, 3 * n - 1, 3 * n];
            equivalencies.push(EquivalencyDef {
                program: "IEAP".to_string(),
                level: n,
                to_program: "EHSS".to_string(),
                to_levels: span.clone(),
            });
            equivalencies.push(EquivalencyDef {
                program: "IEAP".to_string(),
                level: n,
                to_program: "GESL".to_string(),
                to_levels: span,
            });
        }
        // Weekend Express has no declared relationship to any program.

        Self {
            programs: vec![
                ProgramDef {
                    code: "EHSS".to_string(),
                    name: "English for High School Students".to_string(),
                    levels: numeric("EHSS", 12),
                },
                ProgramDef {
                    code: "GESL".to_string(),
                    name: "General English as a Second Language".to_string(),
                    levels: numeric("GESL", 12),
                },
                ProgramDef {
                    code: "IEAP".to_string(),
                    name: "Intensive English for Academic Purposes".to_string(),
                    levels: ieap_levels,
                },
                ProgramDef {
                    code: "WEX".to_string(),
                    name: "Weekend Express".to_string(),
                    levels: numeric("WEX", 6),
                },
            ],
            equivalencies,
        }
    }

    /// Loads a catalog from a file (format inferred from the extension).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let catalog: Self = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?
            .try_deserialize()?;
        Ok(catalog)
    }

    /// Loads the catalog named by `PROGRESSION_CATALOG`, falling back to
    /// the built-in default when the variable is unset.
    pub fn load() -> Result<Self, CatalogError> {
        match std::env::var(CATALOG_FILE_ENV) {
            Ok(path) => Self::from_file(path),
            Err(_) => Ok(Self::builtin()),
        }
    }

    /// Semantic validation of the catalog definition.
    ///
    /// # Errors
    ///
    /// - duplicate programs or level numbers
    /// - programs without levels
    /// - negative levels without a short code (they have no numeric
    ///   course-code rendering)
    /// - equivalencies referencing undefined levels or their own program
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen_programs = BTreeSet::new();
        for program in &self.programs {
            if !seen_programs.insert(program.code.as_str()) {
                return Err(CatalogError::DuplicateProgram {
                    program: program.code.clone(),
                });
            }
            if program.levels.is_empty() {
                return Err(CatalogError::EmptyProgram {
                    program: program.code.clone(),
                });
            }

            let mut seen_numbers = BTreeSet::new();
            for level in &program.levels {
                if !seen_numbers.insert(level.number) {
                    return Err(CatalogError::DuplicateLevel {
                        program: program.code.clone(),
                        number: level.number,
                    });
                }
                if level.number < 0 && level.short_code.is_none() {
                    return Err(CatalogError::MissingShortCode {
                        program: program.code.clone(),
                        number: level.number,
                    });
                }
            }
        }

        for edge in &self.equivalencies {
            if edge.program == edge.to_program {
                return Err(CatalogError::SelfEquivalency {
                    program: edge.program.clone(),
                });
            }
            self.require_level(&edge.program, edge.level)?;
            for &number in &edge.to_levels {
                self.require_level(&edge.to_program, number)?;
            }
        }

        Ok(())
    }

    fn require_level(&self, program: &str, number: i32) -> Result<(), CatalogError> {
        let defined = self
            .programs
            .iter()
            .find(|p| p.code == program)
            .map(|p| p.levels.iter().any(|l| l.number == number))
            .unwrap_or(false);
        if !defined {
            return Err(CatalogError::UnknownLevel {
                program: program.to_string(),
                number,
            });
        }
        Ok(())
    }

    /// Validates and builds the immutable runtime catalog.
    pub fn build(&self) -> Result<EquivalencyResolver, CatalogError> {
        self.validate()?;

        let mut levels = Vec::new();
        for program in &self.programs {
            let code = ProgramCode::new(&program.code)?;
            for level in &program.levels {
                levels.push(match &level.short_code {
                    Some(short) => {
                        Level::with_short_code(code.clone(), level.number, &level.name, short)
                    }
                    None => Level::new(code.clone(), level.number, &level.name),
                });
            }
        }
        let registry = Arc::new(LevelRegistry::from_levels(levels)?);

        let mut edges = Vec::new();
        for edge in &self.equivalencies {
            edges.push(EquivalencyEdge {
                program: ProgramCode::new(&edge.program)?,
                level: edge.level,
                to_program: ProgramCode::new(&edge.to_program)?,
                to_levels: edge.to_levels.iter().copied().collect(),
            });
        }

        Ok(EquivalencyResolver::from_edges(registry, edges)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_validates_and_builds() {
        let catalog = CatalogConfig::builtin();
        catalog.validate().unwrap();
        let resolver = catalog.build().unwrap();

        let registry = resolver.registry();
        assert_eq!(registry.levels_for_program(&ProgramCode::new("EHSS").unwrap()).len(), 12);
        assert_eq!(registry.levels_for_program(&ProgramCode::new("IEAP").unwrap()).len(), 6);
    }

    #[test]
    fn builtin_sub_beginner_levels_render_literal_codes() {
        let resolver = CatalogConfig::builtin().build().unwrap();
        let ieap = ProgramCode::new("IEAP").unwrap();
        let registry = resolver.registry();

        assert_eq!(
            registry.level(&ieap, -2).unwrap().course_code().as_str(),
            "IEAP-PRE"
        );
        assert_eq!(
            registry.level(&ieap, -1).unwrap().course_code().as_str(),
            "IEAP-BEG"
        );
    }

    #[test]
    fn builtin_weekend_express_has_no_equivalencies() {
        let resolver = CatalogConfig::builtin().build().unwrap();
        let registry = resolver.registry().clone();
        let wex = ProgramCode::new("WEX").unwrap();

        for level in registry.levels_for_program(&wex) {
            for target in registry.programs() {
                if target != &wex {
                    assert!(resolver.equivalent_levels(level, target).is_empty());
                }
            }
        }
    }

    #[test]
    fn duplicate_level_fails_validation() {
        let mut catalog = CatalogConfig::builtin();
        let level = catalog.programs[0].levels[0].clone();
        catalog.programs[0].levels.push(level);

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateLevel { .. })
        ));
    }

    #[test]
    fn negative_level_without_short_code_fails_validation() {
        let mut catalog = CatalogConfig::builtin();
        catalog.programs[0].levels.push(LevelDef {
            number: -3,
            name: "Below Pre".to_string(),
            short_code: None,
        });

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::MissingShortCode { number: -3, .. })
        ));
    }

    #[test]
    fn dangling_equivalency_fails_validation() {
        let mut catalog = CatalogConfig::builtin();
        catalog.equivalencies.push(EquivalencyDef {
            program: "EHSS".to_string(),
            level: 1,
            to_program: "WEX".to_string(),
            to_levels: vec![99],
        });

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::UnknownLevel { number: 99, .. })
        ));
    }

    #[test]
    fn loads_catalog_from_a_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[[programs]]
code = "EHSS"
name = "English for High School Students"

[[programs.levels]]
number = 1
name = "EHSS Level 1"

[[programs.levels]]
number = 2
name = "EHSS Level 2"

[[programs]]
code = "GESL"
name = "General English"

[[programs.levels]]
number = 1
name = "GESL Level 1"

[[equivalencies]]
program = "GESL"
level = 1
to_program = "EHSS"
to_levels = [1]
"#
        )
        .unwrap();

        let catalog = CatalogConfig::from_file(file.path()).unwrap();
        catalog.validate().unwrap();

        let resolver = catalog.build().unwrap();
        let registry = resolver.registry().clone();
        let gesl1 = registry
            .level(&ProgramCode::new("GESL").unwrap(), 1)
            .unwrap();
        let matches = resolver.equivalent_levels(gesl1, &ProgramCode::new("EHSS").unwrap());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].number(), 1);
    }
}
