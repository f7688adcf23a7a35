use thiserror::Error;

use crate::domain::models::{SessionId, StudentId};

/// Errors that can occur during roster operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("student not found: {0}")]
    StudentNotFound(StudentId),
    #[error("session {session_id} not found for student {student_id}")]
    SessionNotFound {
        student_id: StudentId,
        session_id: SessionId,
    },
    #[error("persistence failed: {0}")]
    Persistence(String),
}

impl RosterError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}
