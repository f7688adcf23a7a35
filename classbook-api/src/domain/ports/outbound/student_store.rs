//! Student store port (outbound).
//!
//! Defines the interface for persisting the roster as an opaque document.

use async_trait::async_trait;

use crate::domain::{models::Student, RosterError};

/// Outbound port for roster persistence.
///
/// The store only ever sees the whole roster: it is loaded once at start-up
/// and written through after every mutation.
#[async_trait]
pub trait StudentStore: Send + Sync + 'static {
    /// Load every stored student, in the order they were saved.
    async fn load(&self) -> Result<Vec<Student>, RosterError>;

    /// Replace the stored roster.
    async fn save(&self, students: &[Student]) -> Result<(), RosterError>;
}
