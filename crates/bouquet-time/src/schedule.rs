//! Midnight schedule - drift-correcting daily trigger
//!
//! The next fire time is recomputed from the wall clock before every wait,
//! never derived from a fixed period.

use std::time::Duration;

use chrono::{Days, NaiveDateTime, NaiveTime};

use crate::Clock;

/// Floor on any computed wait
const MIN_DELAY: Duration = Duration::from_millis(1);

/// Computes the next local midnight from an observed instant
#[derive(Clone, Copy, Debug, Default)]
pub struct MidnightSchedule;

impl MidnightSchedule {
    pub fn new() -> Self {
        MidnightSchedule
    }

    /// First local midnight strictly after `now`
    pub fn next_fire(&self, now: NaiveDateTime) -> NaiveDateTime {
        now.date()
            .checked_add_days(Days::new(1))
            .map(|d| d.and_time(NaiveTime::MIN))
            .unwrap_or(NaiveDateTime::MAX)
    }

    /// Real wait until the next midnight on `clock`, honoring offset
    /// changes between now and then
    pub fn delay_on<C: Clock + ?Sized>(&self, clock: &C) -> Duration {
        clock.until(self.next_fire(clock.now())).max(MIN_DELAY)
    }

    /// Wait from `now` until the next midnight, in continuous local time
    pub fn delay_from(&self, now: NaiveDateTime) -> Duration {
        (self.next_fire(now) - now)
            .to_std()
            .unwrap_or(MIN_DELAY)
            .max(MIN_DELAY)
    }
}
