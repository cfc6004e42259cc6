//! Cycle status repository port.
//!
//! Persistence for [`StudentCycleStatus`] records. The store owns the
//! physical rows; the engine owns the one-active-record-per-student
//! invariant and relies on `supersede` being atomic to keep it.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, StudentId};
use crate::domain::progression::StudentCycleStatus;

/// Repository port for cycle status records.
#[async_trait]
pub trait CycleStatusRepository: Send + Sync {
    /// The single active record for a student, if any.
    async fn find_active(&self, student: &StudentId) -> Result<Option<StudentCycleStatus>, DomainError>;

    /// Every record for a student, newest first.
    async fn find_all(&self, student: &StudentId) -> Result<Vec<StudentCycleStatus>, DomainError>;

    /// Persists a new record.
    ///
    /// # Errors
    ///
    /// - `Conflict` if saving an active record while another active record
    ///   exists for the same student
    /// - `StoreError` on infrastructure failure
    async fn save(&self, status: &StudentCycleStatus) -> Result<(), DomainError>;

    /// Atomically replaces the active record: persists `deactivated` in
    /// place of the prior row and `next` as the new active record.
    ///
    /// Implementations must apply both writes under one lock/transaction so
    /// two concurrent detections cannot both leave an active record.
    ///
    /// # Errors
    ///
    /// - `StatusNotFound` if the record being superseded does not exist
    /// - `StoreError` on infrastructure failure
    async fn supersede(
        &self,
        deactivated: &StudentCycleStatus,
        next: &StudentCycleStatus,
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_status_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CycleStatusRepository) {}
    }
}
