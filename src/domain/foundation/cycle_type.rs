//! CycleType enum for major academic cycle transitions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProgramType;

/// Kind of academic cycle a student entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CycleType {
    /// First time the student is observed in any program.
    NewEntry,
    /// Program of record moved from a language track to a bachelor major.
    LanguageToBachelor,
    /// Program of record moved from a bachelor to a master major.
    BachelorToMaster,
}

impl CycleType {
    /// Classifies a program-of-record change as a cycle transition.
    ///
    /// Only strictly forward jumps count; lateral moves, backward moves,
    /// and category skips (language straight to master) return `None`.
    pub fn for_transition(from: ProgramType, to: ProgramType) -> Option<CycleType> {
        match (from, to) {
            (ProgramType::Language, ProgramType::Bachelor) => Some(CycleType::LanguageToBachelor),
            (ProgramType::Bachelor, ProgramType::Master) => Some(CycleType::BachelorToMaster),
            _ => None,
        }
    }
}

impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CycleType::NewEntry => "NEW_ENTRY",
            CycleType::LanguageToBachelor => "LANGUAGE_TO_BACHELOR",
            CycleType::BachelorToMaster => "BACHELOR_TO_MASTER",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ProgramType::*;

    #[test]
    fn language_to_bachelor_is_a_transition() {
        assert_eq!(
            CycleType::for_transition(Language, Bachelor),
            Some(CycleType::LanguageToBachelor)
        );
    }

    #[test]
    fn bachelor_to_master_is_a_transition() {
        assert_eq!(
            CycleType::for_transition(Bachelor, Master),
            Some(CycleType::BachelorToMaster)
        );
    }

    #[test]
    fn lateral_moves_are_not_transitions() {
        assert_eq!(CycleType::for_transition(Language, Language), None);
        assert_eq!(CycleType::for_transition(Bachelor, Bachelor), None);
        assert_eq!(CycleType::for_transition(Master, Master), None);
    }

    #[test]
    fn backward_moves_are_not_transitions() {
        assert_eq!(CycleType::for_transition(Master, Bachelor), None);
        assert_eq!(CycleType::for_transition(Master, Language), None);
        assert_eq!(CycleType::for_transition(Bachelor, Language), None);
    }

    #[test]
    fn category_skips_are_not_transitions() {
        assert_eq!(CycleType::for_transition(Language, Master), None);
    }

    #[test]
    fn displays_screaming_snake_case() {
        assert_eq!(format!("{}", CycleType::NewEntry), "NEW_ENTRY");
        assert_eq!(
            format!("{}", CycleType::LanguageToBachelor),
            "LANGUAGE_TO_BACHELOR"
        );
    }

    #[test]
    fn serializes_to_screaming_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&CycleType::BachelorToMaster).unwrap(),
            "\"BACHELOR_TO_MASTER\""
        );
    }
}
