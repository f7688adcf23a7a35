//! Attendance and absence marking.
//!
//! Every change to a session's flags goes through [`Session::apply`], which
//! keeps `attended` and `absent` mutually exclusive.

use crate::domain::models::Session;

/// A requested change to a session's attendance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceChange {
    /// Flip `attended`. Marking attended clears `absent`.
    ToggleAttended,
    /// Flip `absent`. Marking absent clears `attended`.
    ToggleAbsent,
    /// Set `attended` to the given value. Idempotent.
    SetAttended(bool),
}

impl Session {
    /// Apply an attendance change. Returns whether the session changed.
    pub fn apply(&mut self, change: AttendanceChange) -> bool {
        let before = (self.attended, self.absent);

        match change {
            AttendanceChange::ToggleAttended => self.set_attended(!self.attended),
            AttendanceChange::ToggleAbsent => self.set_absent(!self.absent),
            AttendanceChange::SetAttended(attended) => {
                if self.attended != attended {
                    self.set_attended(attended);
                }
            }
        }

        debug_assert!(!(self.attended && self.absent));
        before != (self.attended, self.absent)
    }

    /// Clear `attended` on a record stored with both flags set.
    ///
    /// Only needed for documents written outside this service.
    pub(crate) fn repair_flags(&mut self) -> bool {
        if self.attended && self.absent {
            self.attended = false;
            return true;
        }
        false
    }

    fn set_attended(&mut self, attended: bool) {
        if attended {
            self.absent = false;
        }
        self.attended = attended;
    }

    fn set_absent(&mut self, absent: bool) {
        if absent {
            self.attended = false;
        }
        self.absent = absent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SessionId;
    use time::macros::date;

    fn session() -> Session {
        Session::new(
            SessionId::new(0),
            date!(2024 - 01 - 01),
            "10:00".parse().unwrap(),
            "11:00".parse().unwrap(),
            "100",
        )
    }

    fn state(s: &Session) -> (bool, bool) {
        (s.attended(), s.absent())
    }

    #[test]
    fn attended_then_absent_leaves_only_absent() {
        let mut s = session();
        s.apply(AttendanceChange::ToggleAttended);
        s.apply(AttendanceChange::ToggleAbsent);
        assert_eq!(state(&s), (false, true));
    }

    #[test]
    fn absent_then_attended_leaves_only_attended() {
        let mut s = session();
        s.apply(AttendanceChange::ToggleAbsent);
        s.apply(AttendanceChange::ToggleAttended);
        assert_eq!(state(&s), (true, false));
    }

    #[test]
    fn toggling_twice_restores_pending() {
        let mut s = session();
        assert!(s.apply(AttendanceChange::ToggleAttended));
        assert!(s.apply(AttendanceChange::ToggleAttended));
        assert_eq!(state(&s), (false, false));
        assert!(s.is_pending());
    }

    #[test]
    fn unmarking_absent_does_not_mark_attended() {
        let mut s = session();
        s.apply(AttendanceChange::ToggleAbsent);
        s.apply(AttendanceChange::ToggleAbsent);
        assert_eq!(state(&s), (false, false));
    }

    #[test]
    fn no_toggle_sequence_sets_both_flags() {
        let changes = [
            AttendanceChange::ToggleAttended,
            AttendanceChange::ToggleAbsent,
            AttendanceChange::SetAttended(true),
            AttendanceChange::SetAttended(false),
        ];

        // Every sequence of up to 8 changes, encoded in base 4.
        for len in 0..=8u32 {
            for code in 0..4usize.pow(len) {
                let mut s = session();
                let mut rest = code;
                for _ in 0..len {
                    s.apply(changes[rest % 4]);
                    rest /= 4;
                    assert!(!(s.attended() && s.absent()), "sequence {code} of {len}");
                }
            }
        }
    }

    #[test]
    fn set_attended_is_idempotent_from_every_state() {
        for start in [
            AttendanceChange::ToggleAttended,
            AttendanceChange::ToggleAbsent,
            AttendanceChange::SetAttended(false),
        ] {
            for target in [true, false] {
                let mut once = session();
                once.apply(start);
                once.apply(AttendanceChange::SetAttended(target));

                let mut twice = once.clone();
                assert!(!twice.apply(AttendanceChange::SetAttended(target)));
                assert_eq!(once, twice);
                assert_eq!(twice.attended(), target);
            }
        }
    }

    #[test]
    fn repair_clears_attended_when_both_flags_are_stored() {
        let mut s = session();
        s.attended = true;
        s.absent = true;
        assert!(s.repair_flags());
        assert_eq!(state(&s), (false, true));
        assert!(!s.repair_flags());
    }

    #[test]
    fn set_attended_false_keeps_absent() {
        let mut s = session();
        s.apply(AttendanceChange::ToggleAbsent);
        assert!(!s.apply(AttendanceChange::SetAttended(false)));
        assert_eq!(state(&s), (false, true));
    }
}
