use std::collections::HashSet;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::{
        MutationResponse, SessionRowResponse, StudentResponse, StudentSummaryResponse,
    },
    app_state::AppState,
    domain::models::{EnrollmentRequest, Session, SessionId, StudentId},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route("/:student_id", get(get_student).delete(remove_student))
        .route("/:student_id/sessions", get(list_sessions))
        .route("/:student_id/sessions/attendance", put(set_attendance_batch))
        .route(
            "/:student_id/sessions/:session_id/attendance",
            post(toggle_attendance),
        )
        .route(
            "/:student_id/sessions/:session_id/absence",
            post(toggle_absent),
        )
}

#[instrument(name = "list_students", skip(app_state))]
async fn list_students(State(app_state): State<AppState>) -> Json<Vec<StudentSummaryResponse>> {
    let students = app_state.roster.list_students().await;
    Json(students.into_iter().map(Into::into).collect())
}

#[instrument(name = "create_student", skip(app_state, body))]
async fn create_student(
    State(app_state): State<AppState>,
    Json(body): Json<EnrollmentRequest>,
) -> Result<(StatusCode, Json<MutationResponse<StudentResponse>>), ApiError> {
    let created = app_state.roster.create_student(body).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[instrument(name = "get_student", skip(app_state))]
async fn get_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = app_state.roster.get_student(&student_id).await?;
    Ok(Json(student.into()))
}

#[instrument(name = "remove_student", skip(app_state))]
async fn remove_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<MutationResponse<()>>, ApiError> {
    let removed = app_state.roster.remove_student(&student_id).await?;
    Ok(Json(removed.into()))
}

#[instrument(name = "list_sessions", skip(app_state))]
async fn list_sessions(
    State(app_state): State<AppState>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<Vec<SessionRowResponse>>, ApiError> {
    let rows = app_state.roster.session_table(&student_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[instrument(name = "toggle_attendance", skip(app_state))]
async fn toggle_attendance(
    State(app_state): State<AppState>,
    Path((student_id, session_id)): Path<(StudentId, u32)>,
) -> Result<Json<MutationResponse<Session>>, ApiError> {
    let updated = app_state
        .roster
        .toggle_attendance(&student_id, SessionId::new(session_id))
        .await?;
    Ok(Json(updated.into()))
}

#[instrument(name = "toggle_absent", skip(app_state))]
async fn toggle_absent(
    State(app_state): State<AppState>,
    Path((student_id, session_id)): Path<(StudentId, u32)>,
) -> Result<Json<MutationResponse<Session>>, ApiError> {
    let updated = app_state
        .roster
        .toggle_absent(&student_id, SessionId::new(session_id))
        .await?;
    Ok(Json(updated.into()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttendanceBatchPayload {
    session_ids: HashSet<SessionId>,
    attended: bool,
}

#[instrument(name = "set_attendance_batch", skip(app_state))]
async fn set_attendance_batch(
    State(app_state): State<AppState>,
    Path(student_id): Path<StudentId>,
    Json(body): Json<AttendanceBatchPayload>,
) -> Result<Json<MutationResponse<Vec<Session>>>, ApiError> {
    let updated = app_state
        .roster
        .set_attendance_batch(&student_id, &body.session_ids, body.attended)
        .await?;
    Ok(Json(updated.into()))
}
