//! Letter Grade Policy Adapter
//!
//! Standard letter-grade scale mapped to grade points. A grade passes when
//! its point value reaches the institutional threshold (GPA 1.0, a `D`).

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::ports::GradingPolicy;

/// Minimum grade points counted as passing.
pub const PASSING_THRESHOLD: f32 = 1.0;

static GRADE_POINTS: Lazy<HashMap<&'static str, f32>> = Lazy::new(|| {
    HashMap::from([
        ("A+", 4.0),
        ("A", 4.0),
        ("A-", 3.7),
        ("B+", 3.3),
        ("B", 3.0),
        ("B-", 2.7),
        ("C+", 2.3),
        ("C", 2.0),
        ("C-", 1.7),
        ("D+", 1.3),
        ("D", 1.0),
        ("F", 0.0),
    ])
});

/// Grading policy over the standard letter scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterGradePolicy;

impl LetterGradePolicy {
    pub fn new() -> Self {
        Self
    }

    /// Grade points for a letter grade, `None` for unrecognized strings.
    pub fn grade_points(grade: &str) -> Option<f32> {
        GRADE_POINTS.get(grade.trim().to_uppercase().as_str()).copied()
    }
}

impl GradingPolicy for LetterGradePolicy {
    fn is_passing(&self, grade: &str) -> bool {
        Self::grade_points(grade).is_some_and(|points| points >= PASSING_THRESHOLD)
    }
}
