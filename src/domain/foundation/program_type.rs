//! ProgramType enum classifying programs into cycle categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cycle category of a program of study.
///
/// Decided once at the boundary (the student directory classifies each
/// major) and switched on exhaustively from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramType {
    /// A language track (EHSS, GESL, IEAP, ...).
    Language,
    /// A bachelor's degree major.
    Bachelor,
    /// A master's degree major.
    Master,
}

impl ProgramType {
    /// Returns true for degree programs (bachelor or master).
    pub fn is_degree(&self) -> bool {
        matches!(self, ProgramType::Bachelor | ProgramType::Master)
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProgramType::Language => "Language",
            ProgramType::Bachelor => "Bachelor",
            ProgramType::Master => "Master",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_classification() {
        assert!(!ProgramType::Language.is_degree());
        assert!(ProgramType::Bachelor.is_degree());
        assert!(ProgramType::Master.is_degree());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&ProgramType::Language).unwrap(),
            "\"language\""
        );
        assert_eq!(
            serde_json::to_string(&ProgramType::Bachelor).unwrap(),
            "\"bachelor\""
        );
    }
}
