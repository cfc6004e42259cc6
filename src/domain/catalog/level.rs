//! Level value object - one step within a program's sequence.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::domain::foundation::{CourseCode, ProgramCode};

/// A single level within a program.
///
/// Level numbers are signed; sub-beginner levels carry negative numbers
/// (e.g. -2, -1) and order below level 1. Identity is `(program, number)`
/// only - the display name and short code never participate in equality
/// or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    program: ProgramCode,
    number: i32,
    name: String,
    short_code: Option<String>,
}

impl Level {
    /// Creates a numeric level.
    pub fn new(program: ProgramCode, number: i32, name: impl Into<String>) -> Self {
        Self {
            program,
            number,
            name: name.into(),
            short_code: None,
        }
    }

    /// Creates a named sub-level with a literal course-code suffix,
    /// e.g. `PRE` for `IEAP-PRE`.
    pub fn with_short_code(
        program: ProgramCode,
        number: i32,
        name: impl Into<String>,
        short_code: impl Into<String>,
    ) -> Self {
        Self {
            program,
            number,
            name: name.into(),
            short_code: Some(short_code.into().to_uppercase()),
        }
    }

    /// The program this level belongs to.
    pub fn program(&self) -> &ProgramCode {
        &self.program
    }

    /// The signed level number.
    pub fn number(&self) -> i32 {
        self.number
    }

    /// Human-readable level name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Literal course-code suffix, when one is declared.
    pub fn short_code(&self) -> Option<&str> {
        self.short_code.as_deref()
    }

    /// Deterministic course code for this level.
    ///
    /// Numeric levels render zero-padded (`EHSS-05`); levels with a
    /// declared short code render it literally (`IEAP-PRE`). Catalog
    /// validation guarantees negative levels always declare a short code.
    pub fn course_code(&self) -> CourseCode {
        let code = match &self.short_code {
            Some(suffix) => format!("{}-{}", self.program, suffix),
            None => format!("{}-{:02}", self.program, self.number),
        };
        CourseCode::from_formatted(code)
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.program == other.program && self.number == other.number
    }
}

impl Eq for Level {}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.program.hash(state);
        self.number.hash(state);
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.program
            .cmp(&other.program)
            .then(self.number.cmp(&other.number))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.course_code())
    }
}
