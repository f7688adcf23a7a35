use time::{Date, Weekday};

use crate::domain::{
    billing::{deposit_statuses, DepositStatus},
    calendar::{persian_weekday, JalaliDate},
    models::{Session, Student},
};

/// When a session falls relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTiming {
    Past,
    Today,
    Upcoming,
}

impl SessionTiming {
    fn of(date: Date, today: Date) -> Self {
        match date.cmp(&today) {
            std::cmp::Ordering::Less => Self::Past,
            std::cmp::Ordering::Equal => Self::Today,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }
}

/// A session as shown in the student's session table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRow {
    /// 1-based position in the chronological schedule.
    pub position: usize,
    pub session: Session,
    pub weekday: Weekday,
    pub persian_weekday: &'static str,
    pub jalali_date: JalaliDate,
    pub deposit_status: DepositStatus,
    pub timing: SessionTiming,
}

/// Build the display rows for a student's sessions.
pub fn session_rows(student: &Student, today: Date) -> Vec<SessionRow> {
    student
        .sessions()
        .iter()
        .zip(deposit_statuses(student))
        .enumerate()
        .map(|(index, (session, deposit_status))| SessionRow {
            position: index + 1,
            session: session.clone(),
            weekday: session.date.weekday(),
            persian_weekday: persian_weekday(session.date.weekday()),
            jalali_date: JalaliDate::from(session.date),
            deposit_status,
            timing: SessionTiming::of(session.date, today),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ClassType, EnrollmentRequest, StudentId};
    use time::macros::date;

    fn student(days_per_week: u8, dates: Vec<Date>) -> Student {
        EnrollmentRequest {
            name: "Mina".to_string(),
            phone: String::new(),
            address: String::new(),
            class_type: ClassType::Online,
            start_time: "10:00".parse().unwrap(),
            duration: 1,
            price: "100".to_string(),
            first_session_dates: dates,
            days_per_week,
            multi_day: days_per_week > 1,
        }
        .into_student(StudentId::generate())
        .unwrap()
    }

    #[test]
    fn rows_are_numbered_from_one_with_display_labels() {
        let s = student(1, vec![date!(2024 - 01 - 01)]);
        let rows = session_rows(&s, date!(2024 - 01 - 08));

        assert_eq!(
            rows.iter().map(|r| r.position).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(rows[0].weekday, Weekday::Monday);
        assert_eq!(rows[0].persian_weekday, "دوشنبه");
        assert_eq!(rows[0].jalali_date.to_string(), "1402/10/11");
        assert_eq!(
            rows.iter().map(|r| r.timing).collect::<Vec<_>>(),
            vec![
                SessionTiming::Past,
                SessionTiming::Today,
                SessionTiming::Upcoming,
                SessionTiming::Upcoming,
            ]
        );
    }

    #[test]
    fn generated_schedule_is_fully_covered_by_first_payment() {
        let s = student(2, vec![date!(2024 - 01 - 01), date!(2024 - 01 - 03)]);
        let rows = session_rows(&s, date!(2024 - 01 - 01));
        assert_eq!(rows.len(), 8);
        assert!(rows
            .iter()
            .all(|r| r.deposit_status == DepositStatus::TuitionDone));
    }
}
