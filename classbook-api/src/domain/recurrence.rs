//! Weekly recurrence generation.
//!
//! Every first-session date defines a recurrence slot that repeats weekly for
//! one billing month. All slots are merged into one chronological list.

use time::{Date, Duration};

use crate::domain::{
    models::{ClockTime, Session, SessionId},
    RosterError,
};

/// Weekly occurrences generated per recurrence slot (one billing month).
pub const SESSIONS_PER_SLOT: u8 = 4;

/// Generate the session calendar for a new enrollment.
///
/// Each date in `first_session_dates` produces [`SESSIONS_PER_SLOT`] sessions,
/// one week apart and starting on that date. The merged list is stably sorted
/// by date, so sessions sharing a date keep the order of their slots. Ids are
/// assigned in the final chronological order.
pub fn generate_sessions(
    start_time: ClockTime,
    end_time: ClockTime,
    price: &str,
    first_session_dates: &[Date],
) -> Result<Vec<Session>, RosterError> {
    if first_session_dates.is_empty() {
        return Err(RosterError::invalid_input(
            "at least one first session date is required",
        ));
    }

    let mut dates = first_session_dates
        .iter()
        .map(|first| slot_dates(*first))
        .collect::<Result<Vec<_>, _>>()?
        .concat();
    dates.sort();

    Ok(dates
        .into_iter()
        .zip(0u32..)
        .map(|(date, id)| Session::new(SessionId::new(id), date, start_time, end_time, price))
        .collect())
}

fn slot_dates(first: Date) -> Result<Vec<Date>, RosterError> {
    (0..SESSIONS_PER_SLOT)
        .map(|week| {
            first
                .checked_add(Duration::weeks(i64::from(week)))
                .ok_or_else(|| {
                    RosterError::invalid_input(format!(
                        "recurrence starting {first} runs past the supported calendar range"
                    ))
                })
        })
        .collect()
}
