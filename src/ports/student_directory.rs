//! Student directory port.
//!
//! Read/write access to the student and program records owned by the
//! surrounding information system. The engine never touches those tables
//! directly.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProgramCode, ProgramType, StudentId};

/// Port onto the student/program directory.
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    /// Classifies a program code into its cycle category.
    ///
    /// Returns `None` for codes the directory does not know - a checked
    /// outcome, not an error.
    async fn program_type(&self, program: &ProgramCode) -> Result<Option<ProgramType>, DomainError>;

    /// Updates the student's program of record.
    ///
    /// # Errors
    ///
    /// - `StudentNotFound` if the student does not exist
    /// - `StoreError` on infrastructure failure
    async fn set_program(
        &self,
        student: &StudentId,
        program: &ProgramCode,
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_directory_is_object_safe() {
        fn _accepts_dyn(_dir: &dyn StudentDirectory) {}
    }
}
