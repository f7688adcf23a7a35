//! Persian calendar display.
//!
//! Schedules are computed on Gregorian dates. This module only converts them
//! into Jalali (Solar Hijri) labels and Persian weekday names for display.

use std::fmt;
use time::{Date, Weekday};

/// A Jalali calendar date, used only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

const GREGORIAN_DAYS_BEFORE_MONTH: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days in one 33-year Jalali leap cycle.
const CYCLE_33_DAYS: i64 = 12_053;
/// Days in one 4-year sub-cycle.
const CYCLE_4_DAYS: i64 = 1_461;

impl From<Date> for JalaliDate {
    fn from(date: Date) -> Self {
        let gy = i64::from(date.year());
        let gm = usize::from(u8::from(date.month()));
        let gd = i64::from(date.day());

        let gy2 = if gm > 2 { gy + 1 } else { gy };
        let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100
            + (gy2 + 399) / 400
            + gd
            + GREGORIAN_DAYS_BEFORE_MONTH[gm - 1];

        let mut jy = -1_595 + 33 * (days / CYCLE_33_DAYS);
        days %= CYCLE_33_DAYS;
        jy += 4 * (days / CYCLE_4_DAYS);
        days %= CYCLE_4_DAYS;
        if days > 365 {
            jy += (days - 1) / 365;
            days = (days - 1) % 365;
        }

        let (month, day) = if days < 186 {
            (1 + days / 31, 1 + days % 31)
        } else {
            (7 + (days - 186) / 30, 1 + (days - 186) % 30)
        };

        Self {
            year: jy as i32,
            month: month as u8,
            day: day as u8,
        }
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Persian name of a weekday.
pub fn persian_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Saturday => "شنبه",
        Weekday::Sunday => "یکشنبه",
        Weekday::Monday => "دوشنبه",
        Weekday::Tuesday => "سه\u{200c}شنبه",
        Weekday::Wednesday => "چهارشنبه",
        Weekday::Thursday => "پنج\u{200c}شنبه",
        Weekday::Friday => "جمعه",
    }
}
