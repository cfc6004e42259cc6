//! In-Memory Audit Log Adapter
//!
//! Collects audit entries in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{AuditEntry, AuditLog};

/// In-memory audit log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditLog {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
}

impl InMemoryAuditLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded entries, in order.
    pub async fn entries(&self) -> Vec<AuditEntry> {
        self.entries.read().await.clone()
    }

    /// Number of recorded entries.
    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn record(&self, entry: AuditEntry) -> Result<(), DomainError> {
        self.entries.write().await.push(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{StaffId, StudentId};
    use crate::ports::ActivityType;

    #[tokio::test]
    async fn records_entries_in_order() {
        let log = InMemoryAuditLog::new();
        let staff = StaffId::new("registrar-1").unwrap();

        log.record(AuditEntry::new(
            StudentId::new(),
            ActivityType::CycleChange,
            "first",
            staff.clone(),
        ))
        .await
        .unwrap();
        log.record(AuditEntry::new(
            StudentId::new(),
            ActivityType::LanguagePromotion,
            "second",
            staff,
        ))
        .await
        .unwrap();

        let entries = log.entries().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "first");
        assert_eq!(entries[1].description, "second");
    }
}
