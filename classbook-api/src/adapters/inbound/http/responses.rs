//! HTTP response types for the roster endpoints.
//!
//! These types serialize to the JSON format expected by the frontend.

use serde::Serialize;

use crate::domain::{
    billing::{deposit_statuses, DepositStatus},
    models::{format_date, Mutation, Session, Student},
    schedule::{SessionRow, SessionTiming},
};

/// Wrapper for mutation responses.
///
/// `warning` is set when the change was applied but could not be saved.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl<T, U: Into<T>> From<Mutation<U>> for MutationResponse<T> {
    fn from(mutation: Mutation<U>) -> Self {
        Self {
            data: mutation.value.into(),
            warning: mutation.persist_warning.map(|e| e.to_string()),
        }
    }
}

/// A student with its stored fields plus attendance counts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    #[serde(flatten)]
    pub student: Student,
    pub attended_count: usize,
    pub absent_count: usize,
    pub pending_count: usize,
    /// True when some session lies beyond the paid cycle.
    pub tuition_due: bool,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        let summary = student.attendance_summary();
        let tuition_due = deposit_statuses(&student).contains(&DepositStatus::TuitionRequired);
        Self {
            student,
            attended_count: summary.attended,
            absent_count: summary.absent,
            pending_count: summary.pending,
            tuition_due,
        }
    }
}

/// One row of a student's session table.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRowResponse {
    pub position: usize,
    #[serde(flatten)]
    pub session: Session,
    /// English weekday name, e.g. "Monday".
    pub weekday: String,
    pub persian_weekday: &'static str,
    /// Jalali date, e.g. "1402/10/11".
    pub jalali_date: String,
    pub deposit_status: DepositStatus,
    pub is_past: bool,
    pub is_today: bool,
}

impl From<SessionRow> for SessionRowResponse {
    fn from(row: SessionRow) -> Self {
        Self {
            position: row.position,
            session: row.session,
            weekday: row.weekday.to_string(),
            persian_weekday: row.persian_weekday,
            jalali_date: row.jalali_date.to_string(),
            deposit_status: row.deposit_status,
            is_past: row.timing == SessionTiming::Past,
            is_today: row.timing == SessionTiming::Today,
        }
    }
}

/// Brief listing entry for the roster page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummaryResponse {
    pub id: String,
    pub name: String,
    pub days_per_week: u8,
    pub start_time: String,
    pub end_time: String,
    /// Date of the first session that is neither attended nor absent.
    pub next_pending_date: Option<String>,
    pub attended_count: usize,
    pub session_count: usize,
}

impl From<Student> for StudentSummaryResponse {
    fn from(student: Student) -> Self {
        let summary = student.attendance_summary();
        Self {
            id: student.id.to_string(),
            name: student.name.clone(),
            days_per_week: student.days_per_week,
            start_time: student.start_time.to_string(),
            end_time: student.end_time.to_string(),
            next_pending_date: student
                .sessions()
                .iter()
                .find(|s| s.is_pending())
                .map(|s| format_date(s.date)),
            attended_count: summary.attended,
            session_count: student.sessions().len(),
        }
    }
}
