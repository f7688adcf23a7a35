use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::domain::{
    attendance::AttendanceChange,
    models::{EnrollmentRequest, Mutation, Session, SessionId, Student, StudentId},
    ports::{
        inbound::RosterService,
        outbound::{Clock, StudentStore},
    },
    schedule::{session_rows, SessionRow},
    RosterError,
};

/// Implementation of the RosterService inbound port.
///
/// Owns the in-memory roster. Every mutation is applied in memory and then
/// written through to the StudentStore while the roster lock is still held,
/// so writes reach the store in the order the mutations happened.
pub struct RosterServiceImpl<S, C> {
    store: Arc<S>,
    clock: Arc<C>,
    students: Mutex<Vec<Student>>,
}

impl<S: StudentStore, C: Clock> RosterServiceImpl<S, C> {
    /// Build the service from whatever the store currently holds.
    pub async fn load(store: Arc<S>, clock: Arc<C>) -> Result<Self, RosterError> {
        let mut students = store.load().await?;

        for student in &mut students {
            if !student.sessions.windows(2).all(|w| w[0].date <= w[1].date) {
                tracing::warn!(
                    student_id = %student.id,
                    "Stored sessions were out of date order, sorting"
                );
                student.sessions.sort_by_key(|s| s.date);
            }

            for session in &mut student.sessions {
                if session.repair_flags() {
                    tracing::warn!(
                        student_id = %student.id,
                        session_id = %session.id,
                        "Stored session was both attended and absent, keeping absent"
                    );
                }
            }
        }

        tracing::info!("Loaded {} students from store", students.len());

        Ok(Self {
            store,
            clock,
            students: Mutex::new(students),
        })
    }

    async fn write_through<T>(&self, students: &[Student], value: T) -> Mutation<T> {
        match self.store.save(students).await {
            Ok(()) => Mutation::saved(value),
            Err(e) => {
                tracing::warn!("Failed to persist roster, keeping in-memory change: {}", e);
                Mutation::unsaved(value, e)
            }
        }
    }

    async fn apply_single(
        &self,
        student_id: &StudentId,
        session_id: SessionId,
        change: AttendanceChange,
    ) -> Result<Mutation<Session>, RosterError> {
        let mut students = self.students.lock().await;

        let session = find_student_mut(&mut students, student_id)?
            .session_mut(session_id)
            .ok_or_else(|| RosterError::SessionNotFound {
                student_id: student_id.clone(),
                session_id,
            })?;
        session.apply(change);
        let updated = session.clone();

        tracing::debug!(
            attended = updated.attended(),
            absent = updated.absent(),
            "Updated session attendance"
        );

        Ok(self.write_through(&students, updated).await)
    }
}

fn find_student_mut<'a>(
    students: &'a mut [Student],
    student_id: &StudentId,
) -> Result<&'a mut Student, RosterError> {
    students
        .iter_mut()
        .find(|s| &s.id == student_id)
        .ok_or_else(|| RosterError::StudentNotFound(student_id.clone()))
}

#[async_trait]
impl<S: StudentStore, C: Clock> RosterService for RosterServiceImpl<S, C> {
    #[instrument(skip_all, fields(name = %request.name))]
    async fn create_student(
        &self,
        request: EnrollmentRequest,
    ) -> Result<Mutation<Student>, RosterError> {
        // Validation happens before the roster is touched
        let student = request.into_student(StudentId::generate())?;

        let mut students = self.students.lock().await;
        students.push(student.clone());
        tracing::info!(
            student_id = %student.id,
            sessions = student.sessions().len(),
            "Enrolled student"
        );

        Ok(self.write_through(&students, student).await)
    }

    #[instrument(skip(self))]
    async fn remove_student(&self, student_id: &StudentId) -> Result<Mutation<()>, RosterError> {
        let mut students = self.students.lock().await;

        let index = students
            .iter()
            .position(|s| &s.id == student_id)
            .ok_or_else(|| RosterError::StudentNotFound(student_id.clone()))?;
        students.remove(index);
        tracing::info!("Removed student");

        Ok(self.write_through(&students, ()).await)
    }

    async fn list_students(&self) -> Vec<Student> {
        self.students.lock().await.clone()
    }

    async fn get_student(&self, student_id: &StudentId) -> Result<Student, RosterError> {
        self.students
            .lock()
            .await
            .iter()
            .find(|s| &s.id == student_id)
            .cloned()
            .ok_or_else(|| RosterError::StudentNotFound(student_id.clone()))
    }

    #[instrument(skip(self))]
    async fn toggle_attendance(
        &self,
        student_id: &StudentId,
        session_id: SessionId,
    ) -> Result<Mutation<Session>, RosterError> {
        self.apply_single(student_id, session_id, AttendanceChange::ToggleAttended)
            .await
    }

    #[instrument(skip(self))]
    async fn toggle_absent(
        &self,
        student_id: &StudentId,
        session_id: SessionId,
    ) -> Result<Mutation<Session>, RosterError> {
        self.apply_single(student_id, session_id, AttendanceChange::ToggleAbsent)
            .await
    }

    #[instrument(skip(self, session_ids), fields(count = session_ids.len()))]
    async fn set_attendance_batch(
        &self,
        student_id: &StudentId,
        session_ids: &HashSet<SessionId>,
        attended: bool,
    ) -> Result<Mutation<Vec<Session>>, RosterError> {
        let mut students = self.students.lock().await;
        let student = find_student_mut(&mut students, student_id)?;

        // Resolve every id up front so a bad id never leaves a partial batch
        let mut missing: Vec<SessionId> = session_ids
            .iter()
            .filter(|id| student.session(**id).is_none())
            .copied()
            .collect();
        missing.sort();
        if let Some(&session_id) = missing.first() {
            return Err(RosterError::SessionNotFound {
                student_id: student_id.clone(),
                session_id,
            });
        }

        let mut changed = 0;
        let mut updated = Vec::with_capacity(session_ids.len());
        for session in student
            .sessions
            .iter_mut()
            .filter(|s| session_ids.contains(&s.id))
        {
            if session.apply(AttendanceChange::SetAttended(attended)) {
                changed += 1;
            }
            updated.push(session.clone());
        }
        tracing::debug!(changed, "Applied attendance batch");

        Ok(self.write_through(&students, updated).await)
    }

    async fn session_table(&self, student_id: &StudentId) -> Result<Vec<SessionRow>, RosterError> {
        let student = self.get_student(student_id).await?;
        Ok(session_rows(&student, self.clock.today()))
    }
}
