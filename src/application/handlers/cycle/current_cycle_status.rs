//! CurrentCycleStatusHandler - Query for a student's active cycle record.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, StudentId};
use crate::domain::progression::StudentCycleStatus;
use crate::ports::CycleStatusRepository;

/// Query for the single active cycle status of a student.
#[derive(Debug, Clone)]
pub struct CurrentCycleStatusQuery {
    pub student: StudentId,
}

/// Read-only handler over the cycle status repository.
pub struct CurrentCycleStatusHandler {
    statuses: Arc<dyn CycleStatusRepository>,
}

impl CurrentCycleStatusHandler {
    pub fn new(statuses: Arc<dyn CycleStatusRepository>) -> Self {
        Self { statuses }
    }

    /// Returns the active record, `None` when the student has never been
    /// observed in any program.
    pub async fn handle(
        &self,
        query: CurrentCycleStatusQuery,
    ) -> Result<Option<StudentCycleStatus>, DomainError> {
        self.statuses.find_active(&query.student).await
    }
}
