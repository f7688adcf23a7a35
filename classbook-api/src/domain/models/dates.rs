//! Calendar date and wall-clock time helpers shared by the stored records.
//!
//! Dates are stored as `YYYY-MM-DD` and times of day as `HH:MM`, matching the
//! documents already written by the enrollment form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use time::{
    format_description::BorrowedFormatItem, macros::format_description, Date, Duration, Time,
};

pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
pub const CLOCK_TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

pub fn parse_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s.trim(), DATE_FORMAT)
}

pub fn format_date(date: Date) -> String {
    // The format has no fallible components for any representable date.
    date.format(DATE_FORMAT).unwrap_or_default()
}

/// Serde adapter for a single `YYYY-MM-DD` date.
pub mod iso_date {
    use super::*;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(|e| serde::de::Error::custom(format!("{raw}: {e}")))
    }
}

/// Serde adapter for a list of `YYYY-MM-DD` dates.
pub mod iso_date_list {
    use super::*;

    pub fn serialize<S: Serializer>(dates: &[Date], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(dates.iter().map(|date| format_date(*date)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Date>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|raw| {
                parse_date(raw).map_err(|e| serde::de::Error::custom(format!("{raw}: {e}")))
            })
            .collect()
    }
}

/// A wall-clock time of day, written as zero-padded `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(Time);

impl ClockTime {
    /// Add whole hours, returning `None` if the result would pass midnight.
    pub fn checked_add_hours(&self, hours: u8) -> Option<Self> {
        let end = self.0 + Duration::hours(i64::from(hours));
        // Time arithmetic wraps at midnight
        (end > self.0).then_some(Self(end))
    }
}

impl From<Time> for ClockTime {
    fn from(time: Time) -> Self {
        Self(time)
    }
}

impl FromStr for ClockTime {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Time::parse(s.trim(), CLOCK_TIME_FORMAT).map(Self)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self.0.format(CLOCK_TIME_FORMAT).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|e| serde::de::Error::custom(format!("{raw}: expected HH:MM ({e})")))
    }
}
