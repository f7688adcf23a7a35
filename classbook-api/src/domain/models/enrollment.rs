use serde::Deserialize;
use time::Date;

use super::{dates::iso_date_list, ClassType, ClockTime, Student, StudentId};
use crate::domain::{recurrence::generate_sessions, RosterError};

pub const MIN_DURATION_HOURS: u8 = 1;
pub const MAX_DURATION_HOURS: u8 = 4;
pub const MAX_DAYS_PER_WEEK: u8 = 7;

/// Enrollment parameters captured by the student form.
///
/// The end time is never supplied; it is derived from `start_time` and
/// `duration` when the student is created.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequest {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub class_type: ClassType,
    pub start_time: ClockTime,
    pub duration: u8,
    pub price: String,
    #[serde(with = "iso_date_list")]
    pub first_session_dates: Vec<Date>,
    pub days_per_week: u8,
    #[serde(default)]
    pub multi_day: bool,
}

impl EnrollmentRequest {
    /// Check the scheduling constraints and return the derived end time.
    ///
    /// Contact fields and `multi_day` are form concerns and pass through as given.
    pub fn validate(&self) -> Result<ClockTime, RosterError> {
        if !(MIN_DURATION_HOURS..=MAX_DURATION_HOURS).contains(&self.duration) {
            return Err(RosterError::invalid_input(format!(
                "duration must be between {MIN_DURATION_HOURS} and {MAX_DURATION_HOURS} hours, got {}",
                self.duration
            )));
        }

        if !(1..=MAX_DAYS_PER_WEEK).contains(&self.days_per_week) {
            return Err(RosterError::invalid_input(format!(
                "daysPerWeek must be between 1 and {MAX_DAYS_PER_WEEK}, got {}",
                self.days_per_week
            )));
        }

        if self.first_session_dates.len() != usize::from(self.days_per_week) {
            return Err(RosterError::invalid_input(format!(
                "expected {} first session dates, got {}",
                self.days_per_week,
                self.first_session_dates.len()
            )));
        }

        self.start_time
            .checked_add_hours(self.duration)
            .ok_or_else(|| {
                RosterError::invalid_input(format!(
                    "class starting at {} for {} hours would end after midnight",
                    self.start_time, self.duration
                ))
            })
    }

    /// Validate the request and build the student with its generated sessions.
    pub fn into_student(self, id: StudentId) -> Result<Student, RosterError> {
        let end_time = self.validate()?;
        let sessions = generate_sessions(
            self.start_time,
            end_time,
            &self.price,
            &self.first_session_dates,
        )?;

        Ok(Student {
            id,
            name: self.name,
            phone: self.phone,
            address: self.address,
            class_type: self.class_type,
            start_time: self.start_time,
            end_time,
            duration: self.duration,
            price: self.price,
            first_session_dates: self.first_session_dates,
            days_per_week: self.days_per_week,
            multi_day: self.multi_day,
            sessions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn request() -> EnrollmentRequest {
        EnrollmentRequest {
            name: "Reza".to_string(),
            phone: "09121111111".to_string(),
            address: String::new(),
            class_type: ClassType::Offline,
            start_time: "16:30".parse().unwrap(),
            duration: 2,
            price: "450000".to_string(),
            first_session_dates: vec![date!(2024 - 01 - 01)],
            days_per_week: 1,
            multi_day: false,
        }
    }

    fn assert_invalid(req: EnrollmentRequest) {
        assert!(matches!(req.validate(), Err(RosterError::InvalidInput(_))));
    }

    #[test]
    fn end_time_is_start_plus_duration() {
        assert_eq!(request().validate().unwrap().to_string(), "18:30");
    }

    #[test]
    fn duration_must_be_one_to_four_hours() {
        for duration in [0, 5] {
            assert_invalid(EnrollmentRequest {
                duration,
                ..request()
            });
        }
        for duration in 1..=4 {
            assert!(EnrollmentRequest {
                duration,
                ..request()
            }
            .validate()
            .is_ok());
        }
    }

    #[test]
    fn days_per_week_must_be_in_range() {
        assert_invalid(EnrollmentRequest {
            days_per_week: 0,
            first_session_dates: vec![],
            ..request()
        });
        assert_invalid(EnrollmentRequest {
            days_per_week: 8,
            multi_day: true,
            first_session_dates: vec![date!(2024 - 01 - 01); 8],
            ..request()
        });
    }

    #[test]
    fn date_count_must_match_days_per_week() {
        assert_invalid(EnrollmentRequest {
            days_per_week: 2,
            multi_day: true,
            ..request()
        });
        assert!(EnrollmentRequest {
            days_per_week: 2,
            multi_day: true,
            first_session_dates: vec![date!(2024 - 01 - 01), date!(2024 - 01 - 03)],
            ..request()
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn multi_day_flag_is_not_enforced() {
        let student = EnrollmentRequest {
            days_per_week: 2,
            multi_day: false,
            first_session_dates: vec![date!(2024 - 01 - 01), date!(2024 - 01 - 03)],
            ..request()
        }
        .into_student(StudentId::generate())
        .unwrap();

        assert!(!student.multi_day);
        assert_eq!(student.sessions().len(), 8);
    }

    #[test]
    fn class_may_not_run_past_midnight() {
        assert_invalid(EnrollmentRequest {
            start_time: "22:00".parse().unwrap(),
            duration: 2,
            ..request()
        });
    }

    #[test]
    fn contact_fields_are_taken_verbatim() {
        let student = EnrollmentRequest {
            name: String::new(),
            phone: String::new(),
            ..request()
        }
        .into_student(StudentId::generate())
        .unwrap();

        assert!(student.name.is_empty());
        assert!(student.phone.is_empty());
    }

    #[test]
    fn into_student_copies_enrollment_and_generates_sessions() {
        let id = StudentId::generate();
        let student = request().into_student(id.clone()).unwrap();

        assert_eq!(student.id, id);
        assert_eq!(student.end_time.to_string(), "18:30");
        assert_eq!(student.sessions().len(), 4);
        assert!(student
            .sessions()
            .iter()
            .all(|s| s.price == "450000" && s.start_time == student.start_time));
    }

    #[test]
    fn request_deserializes_from_form_payload() {
        let raw = r#"{
            "name": "Neda",
            "classType": "online",
            "startTime": "09:00",
            "duration": 1,
            "price": "300000",
            "firstSessionDates": ["2024-01-06", "2024-01-08"],
            "daysPerWeek": 2,
            "multiDay": true
        }"#;
        let req: EnrollmentRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.first_session_dates.len(), 2);
        assert!(req.phone.is_empty());
        assert_eq!(req.validate().unwrap().to_string(), "10:00");
    }
}
