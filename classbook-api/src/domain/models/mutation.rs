use crate::domain::RosterError;

/// The result of a roster mutation that was applied in memory.
///
/// The in-memory roster is authoritative. If writing it through to the store
/// failed, the change still stands and the failure is carried here so the
/// caller can surface it as a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation<T> {
    pub value: T,
    pub persist_warning: Option<RosterError>,
}

impl<T> Mutation<T> {
    pub fn saved(value: T) -> Self {
        Self {
            value,
            persist_warning: None,
        }
    }

    pub fn unsaved(value: T, err: RosterError) -> Self {
        Self {
            value,
            persist_warning: Some(err),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.persist_warning.is_none()
    }
}
