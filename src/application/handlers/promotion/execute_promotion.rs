//! ExecutePromotionHandler - Transactional promotion batch execution.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::{BatchId, CourseCode, DomainError, StaffId};
use crate::domain::progression::{ClassRef, PromotionPlan, PromotionResult, StudentPromotionError};
use crate::ports::{ActivityType, AuditEntry, AuditLog, EnrollmentStore, NewClass};

/// Command to execute a computed promotion plan.
#[derive(Debug, Clone)]
pub struct ExecutePromotionCommand {
    /// The plan to materialize.
    pub plan: PromotionPlan,
    /// Staff member who triggered the batch.
    pub initiated_by: StaffId,
    /// Free-form operator notes carried into the audit trail.
    pub notes: Option<String>,
}

/// Handler materializing a promotion plan: classes first, then enrollments.
///
/// Single-student failures are collected in the result and never abort the
/// batch; only an unreachable/failing store does. Callers must inspect
/// `PromotionResult::errors` even on `Ok` - partial success is the normal
/// terminal state.
pub struct ExecutePromotionHandler {
    enrollments: Arc<dyn EnrollmentStore>,
    audit: Arc<dyn AuditLog>,
}

impl ExecutePromotionHandler {
    pub fn new(enrollments: Arc<dyn EnrollmentStore>, audit: Arc<dyn AuditLog>) -> Self {
        Self { enrollments, audit }
    }

    pub async fn handle(
        &self,
        cmd: ExecutePromotionCommand,
    ) -> Result<PromotionResult, DomainError> {
        let plan = &cmd.plan;
        let batch_id = BatchId::new();
        info!(
            %batch_id,
            program = %plan.program,
            source_term = %plan.source_term,
            target_term = %plan.target_term,
            eligible = plan.eligible.len(),
            "starting promotion batch"
        );

        let mut created_classes = Vec::new();
        let mut created_enrollments = Vec::new();
        let mut errors = Vec::new();

        // Phase 1: materialize target-term classes. A failed course poisons
        // only the students that depend on it.
        let mut resolved: HashMap<CourseCode, ClassRef> = HashMap::new();
        let mut failed_courses: HashMap<CourseCode, String> = HashMap::new();

        for to_clone in &plan.classes_to_clone {
            match self
                .enrollments
                .find_class(&to_clone.course_code, &plan.target_term)
                .await
            {
                // Already materialized, e.g. by a previous run of the same plan.
                Ok(Some(existing)) => {
                    resolved.insert(to_clone.course_code.clone(), existing);
                }
                Ok(None) => {
                    let new_class = NewClass {
                        course_code: to_clone.course_code.clone(),
                        program: plan.program.clone(),
                        term: plan.target_term.clone(),
                        level_number: to_clone.level_number,
                        section: to_clone.template.section.clone(),
                        capacity: to_clone.template.capacity,
                    };
                    match self.enrollments.create_class(new_class).await {
                        Ok(created) => {
                            debug!(course = %to_clone.course_code, "target class created");
                            created_classes.push(created.clone());
                            resolved.insert(to_clone.course_code.clone(), created);
                        }
                        Err(e) if e.is_fatal() => return Err(e),
                        Err(e) => {
                            warn!(course = %to_clone.course_code, error = %e, "class creation failed");
                            failed_courses.insert(to_clone.course_code.clone(), e.to_string());
                        }
                    }
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    failed_courses.insert(to_clone.course_code.clone(), e.to_string());
                }
            }
        }

        // Phase 2: enroll each eligible student into the resolved class.
        for entry in &plan.eligible {
            let course = entry.to_level.course_code();

            let class = match resolved.get(&course) {
                Some(class) => class.clone(),
                None => {
                    if let Some(reason) = failed_courses.get(&course) {
                        errors.push(StudentPromotionError {
                            student: entry.student,
                            reason: format!("target class unavailable: {}", reason),
                        });
                        continue;
                    }
                    // Course was not in the clone list, so it already
                    // existed in the target term at planning time.
                    match self.enrollments.find_class(&course, &plan.target_term).await {
                        Ok(Some(class)) => {
                            resolved.insert(course.clone(), class.clone());
                            class
                        }
                        Ok(None) => {
                            errors.push(StudentPromotionError {
                                student: entry.student,
                                reason: format!(
                                    "no class for {} in term {}",
                                    course, plan.target_term
                                ),
                            });
                            continue;
                        }
                        Err(e) if e.is_fatal() => return Err(e),
                        Err(e) => {
                            errors.push(StudentPromotionError {
                                student: entry.student,
                                reason: e.to_string(),
                            });
                            continue;
                        }
                    }
                }
            };

            match self.enrollments.enrollment_exists(&entry.student, &class).await {
                Ok(true) => {
                    debug!(student = %entry.student, course = %course, "already enrolled, skipped");
                    continue;
                }
                Ok(false) => {}
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    errors.push(StudentPromotionError {
                        student: entry.student,
                        reason: e.to_string(),
                    });
                    continue;
                }
            }

            match self.enrollments.create_enrollment(&entry.student, &class).await {
                Ok(enrollment) => {
                    self.record_promotion(&cmd, batch_id, entry, &class).await?;
                    created_enrollments.push(enrollment);
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(student = %entry.student, error = %e, "enrollment failed");
                    errors.push(StudentPromotionError {
                        student: entry.student,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            %batch_id,
            classes = created_classes.len(),
            enrollments = created_enrollments.len(),
            errors = errors.len(),
            "promotion batch complete"
        );
        Ok(PromotionResult {
            batch_id,
            created_classes,
            created_enrollments,
            errors,
        })
    }

    async fn record_promotion(
        &self,
        cmd: &ExecutePromotionCommand,
        batch_id: BatchId,
        entry: &crate::domain::progression::EligibleStudent,
        class: &ClassRef,
    ) -> Result<(), DomainError> {
        let audit_entry = AuditEntry::new(
            entry.student,
            ActivityType::LanguagePromotion,
            format!(
                "Promoted from {} to {}",
                entry.from_level.course_code(),
                entry.to_level.course_code()
            ),
            cmd.initiated_by.clone(),
        )
        .with_term(cmd.plan.target_term.clone())
        .with_class(class.id)
        .with_metadata(serde_json::json!({
            "batch_id": batch_id,
            "from_level": entry.from_level.number(),
            "to_level": entry.to_level.number(),
            "notes": cmd.notes,
        }));

        self.audit.record(audit_entry).await
    }
}
