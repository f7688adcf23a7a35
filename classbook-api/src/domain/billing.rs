use serde::Serialize;

use crate::domain::{models::Student, recurrence::SESSIONS_PER_SLOT};

/// Whether a session is covered by the tuition paid at enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DepositStatus {
    TuitionDone,
    TuitionRequired,
}

/// Number of sessions covered by one tuition payment.
pub fn cycle_length(days_per_week: u8) -> usize {
    usize::from(days_per_week) * usize::from(SESSIONS_PER_SLOT)
}

/// Classify a session by its 1-based position in the student's schedule.
///
/// Only the first cycle is treated as paid: every later position requires
/// tuition, with no reset for a second cycle.
pub fn deposit_status(position: usize, days_per_week: u8) -> DepositStatus {
    if position > cycle_length(days_per_week) {
        DepositStatus::TuitionRequired
    } else {
        DepositStatus::TuitionDone
    }
}

/// Deposit status of every session of a student, in schedule order.
pub fn deposit_statuses(student: &Student) -> Vec<DepositStatus> {
    (1..=student.sessions().len())
        .map(|position| deposit_status(position, student.days_per_week))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_day_cycle_ends_after_fourth_session() {
        assert_eq!(deposit_status(4, 1), DepositStatus::TuitionDone);
        assert_eq!(deposit_status(5, 1), DepositStatus::TuitionRequired);
    }

    #[test]
    fn cycle_scales_with_days_per_week() {
        assert_eq!(cycle_length(3), 12);
        assert_eq!(deposit_status(12, 3), DepositStatus::TuitionDone);
        assert_eq!(deposit_status(13, 3), DepositStatus::TuitionRequired);
    }

    #[test]
    fn threshold_does_not_reset_after_second_cycle() {
        assert!((5..=40)
            .all(|position| deposit_status(position, 1) == DepositStatus::TuitionRequired));
    }

    #[test]
    fn serializes_as_camel_case_label() {
        assert_eq!(
            serde_json::to_string(&DepositStatus::TuitionRequired).unwrap(),
            "\"tuitionRequired\""
        );
    }
}
