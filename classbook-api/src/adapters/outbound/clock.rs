use time::{Date, OffsetDateTime, UtcOffset};

use crate::domain::ports::outbound::Clock;

/// Wall clock at a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().to_offset(self.offset).date()
    }
}

/// Clock pinned to one date, for tests.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: Date,
}

#[cfg(test)]
impl FixedClock {
    pub fn new(today: Date) -> Self {
        Self { today }
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.today
    }
}
