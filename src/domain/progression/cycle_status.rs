//! StudentCycleStatus - append-mostly record of a student's current cycle.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CycleStatusId, CycleType, ProgramCode, StudentId, Timestamp};

/// One observed cycle transition for a student.
///
/// Records are never deleted: a superseded record is deactivated with a
/// reason and timestamp, and the replacement becomes the single active
/// record. At most one record per student is active at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentCycleStatus {
    id: CycleStatusId,
    student: StudentId,
    cycle_type: CycleType,
    source_program: Option<ProgramCode>,
    target_program: ProgramCode,
    is_active: bool,
    effective_date: Timestamp,
    deactivated_date: Option<Timestamp>,
    deactivation_reason: Option<String>,
}

impl StudentCycleStatus {
    /// Creates a new active status record effective now.
    pub fn new(
        student: StudentId,
        cycle_type: CycleType,
        source_program: Option<ProgramCode>,
        target_program: ProgramCode,
    ) -> Self {
        Self {
            id: CycleStatusId::new(),
            student,
            cycle_type,
            source_program,
            target_program,
            is_active: true,
            effective_date: Timestamp::now(),
            deactivated_date: None,
            deactivation_reason: None,
        }
    }

    pub fn id(&self) -> CycleStatusId {
        self.id
    }

    pub fn student(&self) -> &StudentId {
        &self.student
    }

    pub fn cycle_type(&self) -> CycleType {
        self.cycle_type
    }

    /// The program the student came from, absent for first entries.
    pub fn source_program(&self) -> Option<&ProgramCode> {
        self.source_program.as_ref()
    }

    /// The program of record this cycle points at.
    pub fn target_program(&self) -> &ProgramCode {
        &self.target_program
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn effective_date(&self) -> Timestamp {
        self.effective_date
    }

    pub fn deactivated_date(&self) -> Option<Timestamp> {
        self.deactivated_date
    }

    pub fn deactivation_reason(&self) -> Option<&str> {
        self.deactivation_reason.as_deref()
    }

    /// Marks this record superseded.
    ///
    /// Idempotent: deactivating an already-inactive record keeps the
    /// original date and reason.
    pub fn deactivate(&mut self, reason: impl Into<String>) {
        if !self.is_active {
            return;
        }
        self.is_active = false;
        self.deactivated_date = Some(Timestamp::now());
        self.deactivation_reason = Some(reason.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(code: &str) -> ProgramCode {
        ProgramCode::new(code).unwrap()
    }

    fn new_entry() -> StudentCycleStatus {
        StudentCycleStatus::new(StudentId::new(), CycleType::NewEntry, None, program("EHSS"))
    }

    #[test]
    fn new_status_is_active_with_no_deactivation_data() {
        let status = new_entry();
        assert!(status.is_active());
        assert!(status.deactivated_date().is_none());
        assert!(status.deactivation_reason().is_none());
        assert!(status.source_program().is_none());
    }

    #[test]
    fn deactivate_records_date_and_reason() {
        let mut status = new_entry();
        status.deactivate("Transitioned to new cycle");

        assert!(!status.is_active());
        assert!(status.deactivated_date().is_some());
        assert_eq!(status.deactivation_reason(), Some("Transitioned to new cycle"));
    }

    #[test]
    fn deactivate_twice_keeps_first_reason() {
        let mut status = new_entry();
        status.deactivate("first");
        let first_date = status.deactivated_date();
        status.deactivate("second");

        assert_eq!(status.deactivation_reason(), Some("first"));
        assert_eq!(status.deactivated_date(), first_date);
    }

    #[test]
    fn serializes_cycle_type_as_screaming_snake_case() {
        let status = new_entry();
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["cycle_type"], "NEW_ENTRY");
    }
}
