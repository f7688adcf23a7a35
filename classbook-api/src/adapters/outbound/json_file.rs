//! JSON document store for the roster.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::{models::Student, ports::outbound::StudentStore, RosterError};

/// Stores the whole roster as one pretty-printed JSON array.
///
/// Writes go to a sibling temp file that is then renamed over the roster, so
/// a crash mid-write never leaves a truncated document behind.
#[derive(Debug, Clone)]
pub struct JsonFileStudentStore {
    path: PathBuf,
}

impl JsonFileStudentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl StudentStore for JsonFileStudentStore {
    async fn load(&self) -> Result<Vec<Student>, RosterError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No roster at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(RosterError::persistence(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            RosterError::persistence(format!("failed to parse {}: {}", self.path.display(), e))
        })
    }

    async fn save(&self, students: &[Student]) -> Result<(), RosterError> {
        let raw = serde_json::to_string_pretty(students)
            .map_err(|e| RosterError::persistence(format!("failed to encode roster: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                RosterError::persistence(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, raw).await.map_err(|e| {
            RosterError::persistence(format!("failed to write {}: {}", temp.display(), e))
        })?;
        tokio::fs::rename(&temp, &self.path).await.map_err(|e| {
            RosterError::persistence(format!(
                "failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!("Saved {} students to {}", students.len(), self.path.display());
        Ok(())
    }
}
