//! DetectCycleChangeHandler - Cycle transition detection on program changes.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{CycleType, DomainError, ProgramCode, StaffId, StudentId};
use crate::domain::progression::StudentCycleStatus;
use crate::ports::{ActivityType, AuditEntry, AuditLog, CycleStatusRepository, StudentDirectory};

/// Deactivation reason stamped on superseded records.
pub const SUPERSEDED_REASON: &str = "Transitioned to new cycle";

/// Command to apply a program-of-record change with cycle detection.
#[derive(Debug, Clone)]
pub struct DetectCycleChangeCommand {
    /// Student whose program of record is changing.
    pub student: StudentId,
    /// The program the student is moving to.
    pub target_program: ProgramCode,
    /// Staff member performing the change.
    pub performed_by: StaffId,
}

/// Error type for cycle detection.
#[derive(Debug, Clone)]
pub enum DetectCycleChangeError {
    /// The directory cannot classify the program.
    UnknownProgram(ProgramCode),
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for DetectCycleChangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectCycleChangeError::UnknownProgram(code) => {
                write!(f, "Unknown program: {}", code)
            }
            DetectCycleChangeError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DetectCycleChangeError {}

impl From<DomainError> for DetectCycleChangeError {
    fn from(err: DomainError) -> Self {
        DetectCycleChangeError::Domain(err)
    }
}

/// Handler recognizing when a program change is a new academic cycle.
///
/// Duplicate detections, lateral moves, and backward moves return
/// `Ok(None)` by policy - "no change" is a valid outcome, distinct from
/// any error.
pub struct DetectCycleChangeHandler {
    directory: Arc<dyn StudentDirectory>,
    statuses: Arc<dyn CycleStatusRepository>,
    audit: Arc<dyn AuditLog>,
}

impl DetectCycleChangeHandler {
    pub fn new(
        directory: Arc<dyn StudentDirectory>,
        statuses: Arc<dyn CycleStatusRepository>,
        audit: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            directory,
            statuses,
            audit,
        }
    }

    pub async fn handle(
        &self,
        cmd: DetectCycleChangeCommand,
    ) -> Result<Option<StudentCycleStatus>, DetectCycleChangeError> {
        // 1. Classify the target program.
        let target_type = self
            .directory
            .program_type(&cmd.target_program)
            .await?
            .ok_or_else(|| DetectCycleChangeError::UnknownProgram(cmd.target_program.clone()))?;

        // 2. Load the student's current active status.
        let current = self.statuses.find_active(&cmd.student).await?;

        let Some(active) = current else {
            // 3a. First observation of this student: NEW_ENTRY.
            let status = StudentCycleStatus::new(
                cmd.student,
                CycleType::NewEntry,
                None,
                cmd.target_program.clone(),
            );
            self.statuses.save(&status).await?;
            self.directory
                .set_program(&cmd.student, &cmd.target_program)
                .await?;
            self.record_cycle_change(&status, &cmd.performed_by).await?;

            info!(student = %cmd.student, program = %cmd.target_program, "new entry cycle recorded");
            return Ok(Some(status));
        };

        // 3b. Duplicate detection: the active record already points here.
        if active.target_program() == &cmd.target_program {
            debug!(student = %cmd.student, program = %cmd.target_program, "duplicate detection, no change");
            return Ok(None);
        }

        // 4. Classify the prior cycle's program and check for a forward jump.
        let prior_type = self
            .directory
            .program_type(active.target_program())
            .await?
            .ok_or_else(|| {
                DetectCycleChangeError::UnknownProgram(active.target_program().clone())
            })?;

        let Some(cycle_type) = CycleType::for_transition(prior_type, target_type) else {
            debug!(
                student = %cmd.student,
                from = %active.target_program(),
                to = %cmd.target_program,
                "lateral or backward move, no cycle change"
            );
            return Ok(None);
        };

        // 5. Supersede atomically: deactivate the prior record, activate the new one.
        let mut deactivated = active.clone();
        deactivated.deactivate(SUPERSEDED_REASON);
        let next = StudentCycleStatus::new(
            cmd.student,
            cycle_type,
            Some(active.target_program().clone()),
            cmd.target_program.clone(),
        );
        self.statuses.supersede(&deactivated, &next).await?;
        self.directory
            .set_program(&cmd.student, &cmd.target_program)
            .await?;
        self.record_cycle_change(&next, &cmd.performed_by).await?;

        info!(
            student = %cmd.student,
            cycle = %cycle_type,
            from = %active.target_program(),
            to = %cmd.target_program,
            "cycle transition recorded"
        );
        Ok(Some(next))
    }

    async fn record_cycle_change(
        &self,
        status: &StudentCycleStatus,
        performed_by: &StaffId,
    ) -> Result<(), DomainError> {
        let description = match status.source_program() {
            Some(source) => format!(
                "{}: {} -> {}",
                status.cycle_type(),
                source,
                status.target_program()
            ),
            None => format!("{}: {}", status.cycle_type(), status.target_program()),
        };

        let entry = AuditEntry::new(
            *status.student(),
            ActivityType::CycleChange,
            description,
            performed_by.clone(),
        )
        .with_metadata(serde_json::json!({
            "cycle_type": status.cycle_type(),
            "source_program": status.source_program(),
            "target_program": status.target_program(),
        }));

        self.audit.record(entry).await
    }
}
