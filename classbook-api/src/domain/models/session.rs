use serde::{Deserialize, Serialize};
use time::Date;

use super::{dates::iso_date, ClockTime, SessionId};

/// One scheduled class meeting, owned by exactly one student.
///
/// `attended` and `absent` are never both set; they only change through
/// `Session::apply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(default)]
    pub(crate) attended: bool,
    #[serde(default)]
    pub(crate) absent: bool,
    pub price: String,
}

impl Session {
    pub fn new(
        id: impl Into<SessionId>,
        date: Date,
        start_time: ClockTime,
        end_time: ClockTime,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            start_time,
            end_time,
            attended: false,
            absent: false,
            price: price.into(),
        }
    }

    pub fn attended(&self) -> bool {
        self.attended
    }

    pub fn absent(&self) -> bool {
        self.absent
    }

    /// Neither attended nor marked absent yet.
    pub fn is_pending(&self) -> bool {
        !self.attended && !self.absent
    }
}
