//! In-Memory Enrollment Store Adapter
//!
//! Classes, completions, and enrollments in memory. Useful for testing
//! and development; uniqueness constraints mirror the production store.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    ClassId, CourseCode, DomainError, EnrollmentId, ErrorCode, ProgramCode, StudentId, TermCode,
};
use crate::domain::progression::{ClassRef, EnrollmentRef};
use crate::ports::{CompletedEnrollment, EnrollmentStore, NewClass};

#[derive(Debug, Default)]
struct Inner {
    classes: Vec<ClassRef>,
    completions: Vec<(ClassId, CompletedEnrollment)>,
    enrollments: Vec<EnrollmentRef>,
}

/// In-memory class/enrollment store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnrollmentStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryEnrollmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a class directly (test setup).
    pub async fn add_class(
        &self,
        course_code: CourseCode,
        program: ProgramCode,
        term: TermCode,
        level_number: i32,
        section: impl Into<String>,
        capacity: u32,
    ) -> ClassRef {
        let class = ClassRef {
            id: ClassId::new(),
            course_code,
            program,
            term,
            level_number,
            section: section.into(),
            capacity,
        };
        self.inner.write().await.classes.push(class.clone());
        class
    }

    /// Seeds a completed enrollment with a final grade (test setup).
    pub async fn record_completion(
        &self,
        class: &ClassRef,
        student: StudentId,
        final_grade: impl Into<String>,
    ) {
        self.inner.write().await.completions.push((
            class.id,
            CompletedEnrollment {
                student,
                final_grade: final_grade.into(),
            },
        ));
    }

    /// All enrollments held by the store (useful for assertions).
    pub async fn enrollments(&self) -> Vec<EnrollmentRef> {
        self.inner.read().await.enrollments.clone()
    }

    /// Number of classes scheduled in a term.
    pub async fn class_count(&self, term: &TermCode) -> usize {
        self.inner
            .read()
            .await
            .classes
            .iter()
            .filter(|c| &c.term == term)
            .count()
    }
}

#[async_trait]
impl EnrollmentStore for InMemoryEnrollmentStore {
    async fn classes_for_program(
        &self,
        term: &TermCode,
        program: &ProgramCode,
    ) -> Result<Vec<ClassRef>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .classes
            .iter()
            .filter(|c| &c.term == term && &c.program == program)
            .cloned()
            .collect())
    }

    async fn completed_enrollments(
        &self,
        class: &ClassRef,
    ) -> Result<Vec<CompletedEnrollment>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .completions
            .iter()
            .filter(|(id, _)| *id == class.id)
            .map(|(_, completion)| completion.clone())
            .collect())
    }

    async fn find_class(
        &self,
        course: &CourseCode,
        term: &TermCode,
    ) -> Result<Option<ClassRef>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .classes
            .iter()
            .find(|c| &c.course_code == course && &c.term == term)
            .cloned())
    }

    async fn create_class(&self, class: NewClass) -> Result<ClassRef, DomainError> {
        let mut inner = self.inner.write().await;
        if inner
            .classes
            .iter()
            .any(|c| c.course_code == class.course_code && c.term == class.term)
        {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                "class already exists for course and term",
            )
            .with_detail("course", class.course_code.as_str())
            .with_detail("term", class.term.as_str()));
        }

        let created = ClassRef {
            id: ClassId::new(),
            course_code: class.course_code,
            program: class.program,
            term: class.term,
            level_number: class.level_number,
            section: class.section,
            capacity: class.capacity,
        };
        inner.classes.push(created.clone());
        Ok(created)
    }

    async fn enrollment_exists(
        &self,
        student: &StudentId,
        class: &ClassRef,
    ) -> Result<bool, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .enrollments
            .iter()
            .any(|e| &e.student == student && e.class_id == class.id))
    }

    async fn create_enrollment(
        &self,
        student: &StudentId,
        class: &ClassRef,
    ) -> Result<EnrollmentRef, DomainError> {
        let mut inner = self.inner.write().await;
        if inner
            .enrollments
            .iter()
            .any(|e| &e.student == student && e.class_id == class.id)
        {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                "student is already enrolled in this class",
            )
            .with_detail("student", student.to_string()));
        }

        let enrollment = EnrollmentRef {
            id: EnrollmentId::new(),
            student: *student,
            class_id: class.id,
        };
        inner.enrollments.push(enrollment.clone());
        Ok(enrollment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(code: &str) -> ProgramCode {
        ProgramCode::new(code).unwrap()
    }

    fn term(code: &str) -> TermCode {
        TermCode::new(code).unwrap()
    }

    fn course(code: &str) -> CourseCode {
        CourseCode::new(code).unwrap()
    }

    #[tokio::test]
    async fn find_class_matches_course_and_term() {
        let store = InMemoryEnrollmentStore::new();
        let class = store
            .add_class(course("EHSS-05"), program("EHSS"), term("2026T1"), 5, "A", 30)
            .await;

        let found = store.find_class(&course("EHSS-05"), &term("2026T1")).await.unwrap();
        assert_eq!(found, Some(class));

        let missing = store.find_class(&course("EHSS-05"), &term("2026T2")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn duplicate_class_creation_is_a_conflict() {
        let store = InMemoryEnrollmentStore::new();
        let new_class = NewClass {
            course_code: course("EHSS-06"),
            program: program("EHSS"),
            term: term("2026T2"),
            level_number: 6,
            section: "A".to_string(),
            capacity: 30,
        };

        store.create_class(new_class.clone()).await.unwrap();
        let result = store.create_class(new_class).await;
        assert!(matches!(result, Err(e) if e.code == ErrorCode::Conflict));
    }

    #[tokio::test]
    async fn duplicate_enrollment_is_a_conflict() {
        let store = InMemoryEnrollmentStore::new();
        let class = store
            .add_class(course("EHSS-06"), program("EHSS"), term("2026T2"), 6, "A", 30)
            .await;
        let student = StudentId::new();

        store.create_enrollment(&student, &class).await.unwrap();
        assert!(store.enrollment_exists(&student, &class).await.unwrap());

        let result = store.create_enrollment(&student, &class).await;
        assert!(matches!(result, Err(e) if e.code == ErrorCode::Conflict));
    }

    #[tokio::test]
    async fn completions_are_scoped_to_their_class() {
        let store = InMemoryEnrollmentStore::new();
        let class_a = store
            .add_class(course("EHSS-05"), program("EHSS"), term("2026T1"), 5, "A", 30)
            .await;
        let class_b = store
            .add_class(course("GESL-03"), program("GESL"), term("2026T1"), 3, "A", 30)
            .await;

        store.record_completion(&class_a, StudentId::new(), "A").await;
        store.record_completion(&class_b, StudentId::new(), "B").await;

        assert_eq!(store.completed_enrollments(&class_a).await.unwrap().len(), 1);
        assert_eq!(store.completed_enrollments(&class_b).await.unwrap().len(), 1);
    }
}
