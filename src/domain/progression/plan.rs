//! Promotion plan and result - transient batch artifacts.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Level;
use crate::domain::foundation::{
    BatchId, ClassId, CourseCode, EnrollmentId, ProgramCode, StudentId, TermCode,
};

/// Handle to a scheduled class owned by the enrollment store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRef {
    pub id: ClassId,
    pub course_code: CourseCode,
    pub program: ProgramCode,
    pub term: TermCode,
    pub level_number: i32,
    pub section: String,
    pub capacity: u32,
}

/// Handle to an enrollment row owned by the enrollment store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentRef {
    pub id: EnrollmentId,
    pub student: StudentId,
    pub class_id: ClassId,
}

/// One student cleared to advance, with the levels involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibleStudent {
    pub student: StudentId,
    pub from_level: Level,
    pub to_level: Level,
}

/// A target-term class that must be created before enrollment, with the
/// source-term class whose structural attributes (capacity, section) are
/// copied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassToClone {
    pub course_code: CourseCode,
    pub level_number: i32,
    pub template: ClassRef,
}

/// Computed promotion plan for one `(term, program)` rollover.
///
/// Transient and side-effect free: re-computing a plan before execution is
/// the supported preview/dry-run path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionPlan {
    pub source_term: TermCode,
    pub target_term: TermCode,
    pub program: ProgramCode,
    pub eligible: Vec<EligibleStudent>,
    pub classes_to_clone: Vec<ClassToClone>,
}

impl PromotionPlan {
    /// True when the plan would change nothing.
    pub fn is_empty(&self) -> bool {
        self.eligible.is_empty() && self.classes_to_clone.is_empty()
    }

    /// Operator-facing counts for dry-run output.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            eligible_students: self.eligible.len(),
            classes_to_create: self.classes_to_clone.len(),
        }
    }
}

/// Headline numbers of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub eligible_students: usize,
    pub classes_to_create: usize,
}

/// A failure isolated to one student during batch execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentPromotionError {
    pub student: StudentId,
    pub reason: String,
}

/// Outcome of one executed promotion batch.
///
/// Partial success is the normal terminal state: callers must inspect
/// `errors` even on `Ok` - an empty list is the full-success signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionResult {
    pub batch_id: BatchId,
    pub created_classes: Vec<ClassRef>,
    pub created_enrollments: Vec<EnrollmentRef>,
    pub errors: Vec<StudentPromotionError>,
}

impl PromotionResult {
    /// True when every student in the plan was processed without error.
    pub fn is_full_success(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(code: &str) -> ProgramCode {
        ProgramCode::new(code).unwrap()
    }

    fn empty_plan() -> PromotionPlan {
        PromotionPlan {
            source_term: TermCode::new("2026T1").unwrap(),
            target_term: TermCode::new("2026T2").unwrap(),
            program: program("EHSS"),
            eligible: Vec::new(),
            classes_to_clone: Vec::new(),
        }
    }

    #[test]
    fn empty_plan_reports_empty() {
        let plan = empty_plan();
        assert!(plan.is_empty());
        assert_eq!(
            plan.summary(),
            PlanSummary {
                eligible_students: 0,
                classes_to_create: 0
            }
        );
    }

    #[test]
    fn plan_with_eligible_students_is_not_empty() {
        let mut plan = empty_plan();
        plan.eligible.push(EligibleStudent {
            student: StudentId::new(),
            from_level: Level::new(program("EHSS"), 5, "EHSS Level 5"),
            to_level: Level::new(program("EHSS"), 6, "EHSS Level 6"),
        });

        assert!(!plan.is_empty());
        assert_eq!(plan.summary().eligible_students, 1);
    }

    #[test]
    fn full_success_means_no_errors() {
        let mut result = PromotionResult {
            batch_id: BatchId::new(),
            created_classes: Vec::new(),
            created_enrollments: Vec::new(),
            errors: Vec::new(),
        };
        assert!(result.is_full_success());

        result.errors.push(StudentPromotionError {
            student: StudentId::new(),
            reason: "target class unavailable".to_string(),
        });
        assert!(!result.is_full_success());
    }
}
