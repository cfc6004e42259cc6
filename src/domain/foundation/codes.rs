//! Code value objects for programs, terms, and courses.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Code identifying a program of study (language track or degree major).
///
/// Normalized to uppercase so lookups are insensitive to how the code was
/// captured upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramCode(String);

impl ProgramCode {
    /// Creates a new ProgramCode, returning error if empty.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into().trim().to_uppercase();
        if code.is_empty() {
            return Err(ValidationError::empty_field("program_code"));
        }
        Ok(Self(code))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProgramCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Code identifying an academic term, e.g. `2026T1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermCode(String);

impl TermCode {
    /// Creates a new TermCode, returning error if empty.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into().trim().to_uppercase();
        if code.is_empty() {
            return Err(ValidationError::empty_field("term_code"));
        }
        Ok(Self(code))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TermCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Course code derived from a level, e.g. `EHSS-05` or `IEAP-PRE`.
///
/// Always produced by [`Level::course_code`](crate::domain::catalog::Level::course_code);
/// construction from raw strings is only needed at store boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCode(String);

impl CourseCode {
    /// Creates a new CourseCode, returning error if empty.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into().trim().to_uppercase();
        if code.is_empty() {
            return Err(ValidationError::empty_field("course_code"));
        }
        Ok(Self(code))
    }

    /// Creates a CourseCode from a pre-validated string.
    pub(crate) fn from_formatted(code: String) -> Self {
        Self(code)
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
