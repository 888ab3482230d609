//! Clock implementations for the temporal engine
//!
//! The engine never reads the host clock itself. Callers pass an instant
//! obtained from a [`Clock`], which keeps every query reproducible.

use std::time::Duration;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use parking_lot::Mutex;

/// Source of local wall-clock instants
pub trait Clock: Send + Sync {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;

    /// Real time remaining until the local wall-clock instant `target`.
    ///
    /// The default treats local time as continuous. Clocks tied to a
    /// timezone override this so offset changes (DST) are accounted for.
    fn until(&self, target: NaiveDateTime) -> Duration {
        (target - self.now()).to_std().unwrap_or(Duration::ZERO)
    }
}

/// Real time from `now` until the local instant `target` in `now`'s zone.
///
/// A `target` skipped by a forward offset change resolves to the first
/// existing local time an hour later; an ambiguous one to its earlier
/// occurrence. Already-passed targets give zero.
pub fn wall_clock_until<Tz: TimeZone>(now: &DateTime<Tz>, target: NaiveDateTime) -> Duration {
    let tz = now.timezone();
    let resolved = tz.from_local_datetime(&target).earliest().or_else(|| {
        target
            .checked_add_signed(chrono::Duration::hours(1))
            .and_then(|later| tz.from_local_datetime(&later).earliest())
    });

    let millis = match resolved {
        Some(at) => at.timestamp_millis() - now.timestamp_millis(),
        None => (target - now.naive_local()).num_milliseconds(),
    };
    Duration::from_millis(millis.max(0) as u64)
}

/// Host clock in the local timezone
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn until(&self, target: NaiveDateTime) -> Duration {
        wall_clock_until(&Local::now(), target)
    }
}

/// Manually driven clock for tests and simulations
/// Only moves when told to
pub struct ManualClock {
    value: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        ManualClock {
            value: Mutex::new(start),
        }
    }

    /// Jump to an arbitrary instant (may move backwards)
    pub fn set(&self, instant: NaiveDateTime) {
        *self.value.lock() = instant;
    }

    /// Move forward by `dt`, saturating at the calendar limit
    pub fn advance(&self, dt: Duration) -> NaiveDateTime {
        let mut value = self.value.lock();
        *value = chrono::Duration::from_std(dt)
            .ok()
            .and_then(|step| value.checked_add_signed(step))
            .unwrap_or(NaiveDateTime::MAX);
        *value
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.value.lock()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }

    fn until(&self, target: NaiveDateTime) -> Duration {
        (**self).until(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, LocalResult, NaiveDate, Utc};

    /// Zone at UTC+1 that springs forward to UTC+2 at 2022-03-26 01:00 UTC
    /// (02:00 local becomes 03:00), making March 26 a 23-hour day
    #[derive(Clone, Copy, Debug)]
    struct SpringForward;

    impl SpringForward {
        fn switch_utc() -> NaiveDateTime {
            at(2022, 3, 26, 1, 0)
        }

        fn winter() -> FixedOffset {
            FixedOffset::east_opt(3600).unwrap()
        }

        fn summer() -> FixedOffset {
            FixedOffset::east_opt(7200).unwrap()
        }
    }

    impl TimeZone for SpringForward {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            SpringForward
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let gap_start = Self::switch_utc() + chrono::Duration::hours(1);
            let gap_end = Self::switch_utc() + chrono::Duration::hours(2);
            if *local < gap_start {
                LocalResult::Single(Self::winter())
            } else if *local >= gap_end {
                LocalResult::Single(Self::summer())
            } else {
                LocalResult::None
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < Self::switch_utc() {
                Self::winter()
            } else {
                Self::summer()
            }
        }
    }

    fn local_in_spring_forward(local: NaiveDateTime) -> DateTime<SpringForward> {
        SpringForward.from_local_datetime(&local).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_manual_clock_holds_still() {
        let clock = ManualClock::new(at(2022, 9, 22, 12, 0));
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_manual_clock_advance_crosses_midnight() {
        let clock = ManualClock::new(at(2022, 9, 22, 23, 30));
        let t = clock.advance(Duration::from_secs(45 * 60));
        assert_eq!(t, at(2022, 9, 23, 0, 15));
        assert_eq!(clock.now(), t);
    }

    #[test]
    fn test_manual_clock_set_backwards() {
        let clock = ManualClock::new(at(2022, 9, 22, 12, 0));
        clock.set(at(2020, 1, 1, 0, 0));
        assert_eq!(clock.now(), at(2020, 1, 1, 0, 0));
    }

    #[test]
    fn test_until_spans_short_day() {
        let now = local_in_spring_forward(at(2022, 3, 26, 0, 0));
        let midnight = at(2022, 3, 27, 0, 0);
        assert_eq!(wall_clock_until(&now, midnight), Duration::from_secs(23 * 3600));
    }

    #[test]
    fn test_until_without_offset_change() {
        let now = local_in_spring_forward(at(2022, 3, 27, 0, 0));
        assert_eq!(
            wall_clock_until(&now, at(2022, 3, 28, 0, 0)),
            Duration::from_secs(24 * 3600)
        );
    }

    #[test]
    fn test_until_skipped_local_time_resolves_later() {
        let now = local_in_spring_forward(at(2022, 3, 26, 1, 0));
        // 02:30 local never happens; 03:30 is one real hour and a half away
        assert_eq!(
            wall_clock_until(&now, at(2022, 3, 26, 2, 30)),
            Duration::from_secs(90 * 60)
        );
    }

    #[test]
    fn test_until_past_target_is_zero() {
        let now = Utc.from_utc_datetime(&at(2022, 3, 26, 12, 0));
        assert_eq!(wall_clock_until(&now, at(2022, 3, 26, 11, 0)), Duration::ZERO);
    }

    #[test]
    fn test_manual_clock_until_is_naive() {
        let clock = ManualClock::new(at(2022, 3, 26, 0, 0));
        assert_eq!(
            clock.until(at(2022, 3, 27, 0, 0)),
            Duration::from_secs(24 * 3600)
        );
        assert_eq!(clock.until(at(2022, 3, 25, 0, 0)), Duration::ZERO);
    }

    #[test]
    fn test_system_clock_is_recent() {
        let now = SystemClock.now();
        assert!(now > at(2020, 1, 1, 0, 0));
    }
}
