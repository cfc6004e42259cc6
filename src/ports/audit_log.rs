//! Audit log port.
//!
//! Structured activity records for every mutation the engine performs.
//! The log itself is owned by the surrounding system.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ClassId, DomainError, StaffId, StudentId, TermCode, Timestamp};

/// Kind of engine activity being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    /// A student advanced one language level at a term boundary.
    LanguagePromotion,
    /// A student entered a new academic cycle.
    CycleChange,
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityType::LanguagePromotion => "LANGUAGE_PROMOTION",
            ActivityType::CycleChange => "CYCLE_CHANGE",
        };
        write!(f, "{}", s)
    }
}

/// One structured audit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub student: StudentId,
    pub activity: ActivityType,
    pub description: String,
    pub performed_by: StaffId,
    pub term: Option<TermCode>,
    pub class: Option<ClassId>,
    pub metadata: serde_json::Value,
    pub recorded_at: Timestamp,
}

impl AuditEntry {
    /// Creates an entry recorded now, with no term/class context.
    pub fn new(
        student: StudentId,
        activity: ActivityType,
        description: impl Into<String>,
        performed_by: StaffId,
    ) -> Self {
        Self {
            student,
            activity,
            description: description.into(),
            performed_by,
            term: None,
            class: None,
            metadata: serde_json::Value::Null,
            recorded_at: Timestamp::now(),
        }
    }

    /// Attaches the term the activity happened in.
    pub fn with_term(mut self, term: TermCode) -> Self {
        self.term = Some(term);
        self
    }

    /// Attaches the class the activity touched.
    pub fn with_class(mut self, class: ClassId) -> Self {
        self.class = Some(class);
        self
    }

    /// Attaches structured metadata.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Port onto the audit log.
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Appends one record.
    ///
    /// # Errors
    ///
    /// - `StoreError` on infrastructure failure
    async fn record(&self, entry: AuditEntry) -> Result<(), DomainError>;
}
