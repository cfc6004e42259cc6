//! In-Memory Student Directory Adapter
//!
//! Holds program classifications and program-of-record assignments in
//! memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ProgramCode, ProgramType, StudentId};
use crate::ports::StudentDirectory;

/// In-memory directory of programs and student program-of-record rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentDirectory {
    programs: Arc<RwLock<HashMap<ProgramCode, ProgramType>>>,
    records: Arc<RwLock<HashMap<StudentId, ProgramCode>>>,
}

impl InMemoryStudentDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory pre-loaded with program classifications.
    pub fn with_programs(
        programs: impl IntoIterator<Item = (ProgramCode, ProgramType)>,
    ) -> Self {
        Self {
            programs: Arc::new(RwLock::new(programs.into_iter().collect())),
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers a program classification.
    pub async fn add_program(&self, program: ProgramCode, program_type: ProgramType) {
        self.programs.write().await.insert(program, program_type);
    }

    /// Current program of record for a student (useful for assertions).
    pub async fn program_of_record(&self, student: &StudentId) -> Option<ProgramCode> {
        self.records.read().await.get(student).cloned()
    }
}

#[async_trait]
impl StudentDirectory for InMemoryStudentDirectory {
    async fn program_type(&self, program: &ProgramCode) -> Result<Option<ProgramType>, DomainError> {
        Ok(self.programs.read().await.get(program).copied())
    }

    async fn set_program(
        &self,
        student: &StudentId,
        program: &ProgramCode,
    ) -> Result<(), DomainError> {
        self.records.write().await.insert(*student, program.clone());
        Ok(())
    }
}
