//! AnalyzeEligibilityHandler - Promotion plan computation for a term rollover.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::domain::catalog::LevelRegistry;
use crate::domain::foundation::{CourseCode, DomainError, ProgramCode, TermCode};
use crate::domain::progression::{ClassRef, ClassToClone, EligibleStudent, PromotionPlan};
use crate::ports::{EnrollmentStore, GradingPolicy};

/// Command to compute the promotion plan for one `(term, program)` pair.
#[derive(Debug, Clone)]
pub struct AnalyzeEligibilityCommand {
    /// Term whose completed classes feed the analysis.
    pub source_term: TermCode,
    /// Term the students would be promoted into.
    pub target_term: TermCode,
    /// Program being rolled over.
    pub program: ProgramCode,
}

/// Error type for plan computation.
///
/// The planner is read-only, so every error is fatal: it reflects broken
/// input and stops the rollover before any write happens.
#[derive(Debug, Clone)]
pub enum AnalyzeEligibilityError {
    /// A source-term class references a level the catalog does not define.
    UnknownLevel { program: ProgramCode, number: i32 },
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for AnalyzeEligibilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzeEligibilityError::UnknownLevel { program, number } => {
                write!(f, "Class references undefined level {}-{}", program, number)
            }
            AnalyzeEligibilityError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AnalyzeEligibilityError {}

impl From<DomainError> for AnalyzeEligibilityError {
    fn from(err: DomainError) -> Self {
        AnalyzeEligibilityError::Domain(err)
    }
}

/// Handler computing which students advance and which classes must exist.
///
/// No side effects: re-running before execution is the supported
/// preview/dry-run path.
pub struct AnalyzeEligibilityHandler {
    registry: Arc<LevelRegistry>,
    enrollments: Arc<dyn EnrollmentStore>,
    grading: Arc<dyn GradingPolicy>,
}

impl AnalyzeEligibilityHandler {
    pub fn new(
        registry: Arc<LevelRegistry>,
        enrollments: Arc<dyn EnrollmentStore>,
        grading: Arc<dyn GradingPolicy>,
    ) -> Self {
        Self {
            registry,
            enrollments,
            grading,
        }
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeEligibilityCommand,
    ) -> Result<PromotionPlan, AnalyzeEligibilityError> {
        // 1. Every source-term class of the program.
        let classes = self
            .enrollments
            .classes_for_program(&cmd.source_term, &cmd.program)
            .await?;

        let mut eligible = Vec::new();
        let mut seen = HashSet::new();
        // course -> (target level number, fallback template class)
        let mut needed: BTreeMap<CourseCode, (i32, ClassRef)> = BTreeMap::new();

        for class in &classes {
            let from = self
                .registry
                .level(&cmd.program, class.level_number)
                .ok_or(AnalyzeEligibilityError::UnknownLevel {
                    program: cmd.program.clone(),
                    number: class.level_number,
                })?;

            // 2. Terminal level: program completion, not promotion.
            let Some(to) = self.registry.next_level(from) else {
                debug!(course = %class.course_code, "terminal level, class excluded from plan");
                continue;
            };

            // 3. Passing completions become eligible entries, one per student.
            let completed = self.enrollments.completed_enrollments(class).await?;
            let mut class_contributed = false;
            for enrollment in completed {
                if !self.grading.is_passing(&enrollment.final_grade) {
                    continue;
                }
                if !seen.insert(enrollment.student) {
                    continue;
                }
                eligible.push(EligibleStudent {
                    student: enrollment.student,
                    from_level: from.clone(),
                    to_level: to.clone(),
                });
                class_contributed = true;
            }

            if class_contributed {
                needed
                    .entry(to.course_code())
                    .or_insert((to.number(), class.clone()));
            }
        }

        // 4. Only classes absent from the target term are scheduled for
        //    cloning, deduplicated by course.
        let mut classes_to_clone = Vec::new();
        for (course, (level_number, fallback)) in needed {
            if self
                .enrollments
                .find_class(&course, &cmd.target_term)
                .await?
                .is_some()
            {
                continue;
            }

            // Prefer the same course's source-term class as the structural
            // template; fall back to the cohort's current class.
            let template = self
                .enrollments
                .find_class(&course, &cmd.source_term)
                .await?
                .unwrap_or(fallback);

            classes_to_clone.push(ClassToClone {
                course_code: course,
                level_number,
                template,
            });
        }

        let plan = PromotionPlan {
            source_term: cmd.source_term,
            target_term: cmd.target_term,
            program: cmd.program,
            eligible,
            classes_to_clone,
        };
        debug!(
            eligible = plan.eligible.len(),
            classes_to_clone = plan.classes_to_clone.len(),
            "promotion plan computed"
        );
        Ok(plan)
    }
}
