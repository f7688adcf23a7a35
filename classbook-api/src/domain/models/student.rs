use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::Date;

use super::{dates::iso_date_list, ClockTime, Session, SessionId, StudentId};

/// Where the class takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ClassType {
    Offline,
    Online,
}

/// A student together with the sessions generated at enrollment.
///
/// Field names match the stored documents, so the struct round-trips through
/// the JSON roster unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub class_type: ClassType,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub duration: u8,
    pub price: String,
    #[serde(with = "iso_date_list")]
    pub first_session_dates: Vec<Date>,
    pub days_per_week: u8,
    pub multi_day: bool,
    #[serde(default)]
    pub(crate) sessions: Vec<Session>,
}

impl Student {
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub(crate) fn session_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| s.id == id)
    }

    /// Count sessions by attendance state.
    pub fn attendance_summary(&self) -> AttendanceSummary {
        self.sessions
            .iter()
            .fold(AttendanceSummary::default(), |mut acc, session| {
                if session.attended() {
                    acc.attended += 1;
                } else if session.absent() {
                    acc.absent += 1;
                } else {
                    acc.pending += 1;
                }
                acc
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub attended: usize,
    pub absent: usize,
    pub pending: usize,
}
