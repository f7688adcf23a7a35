use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::{
    models::{EnrollmentRequest, Mutation, Session, SessionId, Student, StudentId},
    schedule::SessionRow,
    RosterError,
};

/// Inbound port for roster operations.
///
/// This trait defines the use cases that HTTP handlers can invoke. Mutations
/// are applied to the in-memory roster first; a failed write-through comes
/// back as a warning on the returned [`Mutation`], never as an error.
#[async_trait]
pub trait RosterService: Send + Sync + 'static {
    // ========================================================================
    // Students
    // ========================================================================

    /// Enroll a new student and generate their sessions.
    async fn create_student(
        &self,
        request: EnrollmentRequest,
    ) -> Result<Mutation<Student>, RosterError>;

    /// Remove a student together with all of their sessions.
    async fn remove_student(&self, student_id: &StudentId) -> Result<Mutation<()>, RosterError>;

    /// All students, in enrollment order.
    async fn list_students(&self) -> Vec<Student>;

    async fn get_student(&self, student_id: &StudentId) -> Result<Student, RosterError>;

    // ========================================================================
    // Attendance
    // ========================================================================

    /// Flip the attended flag of one session. Marking attended clears absence.
    async fn toggle_attendance(
        &self,
        student_id: &StudentId,
        session_id: SessionId,
    ) -> Result<Mutation<Session>, RosterError>;

    /// Flip the absent flag of one session. Marking absent clears attendance.
    async fn toggle_absent(
        &self,
        student_id: &StudentId,
        session_id: SessionId,
    ) -> Result<Mutation<Session>, RosterError>;

    /// Set the attended flag on several sessions at once.
    ///
    /// Every id is checked before anything changes, so an unknown id leaves
    /// the student untouched. Returns the listed sessions after the update.
    async fn set_attendance_batch(
        &self,
        student_id: &StudentId,
        session_ids: &HashSet<SessionId>,
        attended: bool,
    ) -> Result<Mutation<Vec<Session>>, RosterError>;

    // ========================================================================
    // Display
    // ========================================================================

    /// The student's session table, labelled for display relative to today.
    async fn session_table(&self, student_id: &StudentId) -> Result<Vec<SessionRow>, RosterError>;
}
