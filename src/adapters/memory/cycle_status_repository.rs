//! In-Memory Cycle Status Repository Adapter
//!
//! Keeps cycle status records per student in memory and enforces the
//! one-active-record invariant under a single write lock.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, StudentId};
use crate::domain::progression::StudentCycleStatus;
use crate::ports::CycleStatusRepository;

/// In-memory store of cycle status records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCycleStatusRepository {
    records: Arc<RwLock<HashMap<StudentId, Vec<StudentCycleStatus>>>>,
}

impl InMemoryCycleStatusRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all students.
    pub async fn record_count(&self) -> usize {
        self.records.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl CycleStatusRepository for InMemoryCycleStatusRepository {
    async fn find_active(
        &self,
        student: &StudentId,
    ) -> Result<Option<StudentCycleStatus>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .get(student)
            .and_then(|rows| rows.iter().find(|s| s.is_active()).cloned()))
    }

    async fn find_all(&self, student: &StudentId) -> Result<Vec<StudentCycleStatus>, DomainError> {
        let records = self.records.read().await;
        let mut rows = records.get(student).cloned().unwrap_or_default();
        rows.sort_by_key(|s| std::cmp::Reverse(s.effective_date()));
        Ok(rows)
    }

    async fn save(&self, status: &StudentCycleStatus) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let rows = records.entry(*status.student()).or_default();

        if status.is_active() && rows.iter().any(|s| s.is_active()) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                "student already has an active cycle status",
            )
            .with_detail("student", status.student().to_string()));
        }

        rows.push(status.clone());
        Ok(())
    }

    async fn supersede(
        &self,
        deactivated: &StudentCycleStatus,
        next: &StudentCycleStatus,
    ) -> Result<(), DomainError> {
        // Both writes happen under one lock so no reader can observe two
        // active records, and no concurrent detection can interleave.
        let mut records = self.records.write().await;
        let rows = records.entry(*next.student()).or_default();

        let position = rows
            .iter()
            .position(|s| s.id() == deactivated.id())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::StatusNotFound,
                    "record being superseded does not exist",
                )
                .with_detail("status_id", deactivated.id().to_string())
            })?;

        rows[position] = deactivated.clone();
        rows.push(next.clone());
        Ok(())
    }
}
