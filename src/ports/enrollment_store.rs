//! Enrollment store port.
//!
//! Read/write access to classes and enrollments owned by the surrounding
//! system. Class and enrollment creation must be idempotent-by-lookup on
//! the caller's side: the executor checks before it creates so concurrent
//! rollovers for the same term/program cannot double-materialize.

use async_trait::async_trait;

use crate::domain::foundation::{CourseCode, DomainError, ProgramCode, StudentId, TermCode};
use crate::domain::progression::{ClassRef, EnrollmentRef};

/// A finished enrollment with its recorded final grade.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedEnrollment {
    pub student: StudentId,
    pub final_grade: String,
}

/// Attributes for creating a class in a term.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClass {
    pub course_code: CourseCode,
    pub program: ProgramCode,
    pub term: TermCode,
    pub level_number: i32,
    pub section: String,
    pub capacity: u32,
}

/// Port onto the class/enrollment store.
#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// All classes of a program scheduled in a term.
    async fn classes_for_program(
        &self,
        term: &TermCode,
        program: &ProgramCode,
    ) -> Result<Vec<ClassRef>, DomainError>;

    /// Completed enrollments of one class, with final grades.
    async fn completed_enrollments(
        &self,
        class: &ClassRef,
    ) -> Result<Vec<CompletedEnrollment>, DomainError>;

    /// Looks up a class by course and term. `None` means not scheduled.
    async fn find_class(
        &self,
        course: &CourseCode,
        term: &TermCode,
    ) -> Result<Option<ClassRef>, DomainError>;

    /// Creates a class.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the `(course, term)` pair already exists
    /// - `StoreError` on infrastructure failure
    async fn create_class(&self, class: NewClass) -> Result<ClassRef, DomainError>;

    /// Whether the student already holds an enrollment in the class.
    async fn enrollment_exists(
        &self,
        student: &StudentId,
        class: &ClassRef,
    ) -> Result<bool, DomainError>;

    /// Creates an enrollment.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the `(student, class)` pair already exists
    /// - `StoreError` on infrastructure failure
    async fn create_enrollment(
        &self,
        student: &StudentId,
        class: &ClassRef,
    ) -> Result<EnrollmentRef, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrollment_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn EnrollmentStore) {}
    }
}
