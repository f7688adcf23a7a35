use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A student identifier.
///
/// Opaque string; stored ids are kept as written, new students get a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for StudentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A session identifier, unique within the owning student's session list.
///
/// Sessions are numbered in chronological order when they are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(u32);

impl SessionId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<SessionId> for u32 {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_uuid_text() {
        let id = StudentId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert_ne!(id, StudentId::generate());
    }

    #[test]
    fn any_stored_id_round_trips() {
        let raw = "\"65a1f0c2e4b0a1b2c3d4e5f6\"";
        let id: StudentId = serde_json::from_str(raw).unwrap();
        assert_eq!(id, StudentId::new("65a1f0c2e4b0a1b2c3d4e5f6"));
        assert_eq!(serde_json::to_string(&id).unwrap(), raw);
    }
}
