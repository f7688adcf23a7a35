//! In-memory student store for testing.

use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, RwLock,
};

use crate::domain::{models::Student, ports::outbound::StudentStore, RosterError};

/// Student store backed by a shared Vec.
///
/// Clones share state, so a test can keep a handle while the service owns
/// another. Loads and saves can be made to fail on demand.
#[derive(Clone, Default)]
pub struct InMemoryStudentStore {
    students: Arc<RwLock<Vec<Student>>>,
    saves: Arc<AtomicUsize>,
    fail_saves: Arc<AtomicBool>,
    fail_loads: Arc<AtomicBool>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_students(students: Vec<Student>) -> Self {
        let store = Self::default();
        *store.students.write().unwrap() = students;
        store
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Current stored roster (for test assertions).
    pub fn snapshot(&self) -> Vec<Student> {
        self.students.read().unwrap().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StudentStore for InMemoryStudentStore {
    async fn load(&self) -> Result<Vec<Student>, RosterError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(RosterError::persistence("load failed"));
        }
        Ok(self.snapshot())
    }

    async fn save(&self, students: &[Student]) -> Result<(), RosterError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RosterError::persistence("save failed"));
        }
        *self.students.write().unwrap() = students.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
