//! Temporal Engine - elapsed days, flower cycling, anniversary countdown
//!
//! Every query is a pure function of the engine's fixed configuration and
//! the instant passed in. Nothing is cached between calls.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use bouquet_core::{DayPeriod, EngineConfig, Epoch, Flower, FlowerCatalog, MilestoneSet, Season};

/// Whole calendar days from `from` to `to`, clamped at zero.
/// Time of day on either side is discarded.
#[inline]
pub fn days_between(from: NaiveDateTime, to: NaiveDateTime) -> u64 {
    days_between_dates(from.date(), to.date())
}

/// Calendar-date form of [`days_between`]
#[inline]
pub fn days_between_dates(from: NaiveDate, to: NaiveDate) -> u64 {
    to.signed_duration_since(from).num_days().max(0) as u64
}

/// Season of the observation's calendar month
#[inline]
pub fn season_for(now: NaiveDateTime) -> Season {
    Season::from_month(now.month())
}

/// Time-of-day band of the observation
#[inline]
pub fn day_period_for(now: NaiveDateTime) -> DayPeriod {
    DayPeriod::from_hour(now.hour())
}

/// Next anniversary relative to an observation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Anniversary {
    /// Calendar date of the anniversary
    pub date: NaiveDate,
    /// Which anniversary this is (1 = first)
    pub years_since_epoch: u32,
    /// Whole days from the observation date, 0 on the day itself
    pub days_until: u64,
}

impl Anniversary {
    #[inline]
    pub fn calendar_year(&self) -> i32 {
        self.date.year()
    }

    #[inline]
    pub fn is_today(&self) -> bool {
        self.days_until == 0
    }
}

/// Everything the presentation layer reads for one render
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Observation {
    /// The instant this was computed for
    pub at: NaiveDateTime,
    /// Whole days since the epoch
    pub elapsed_days: u64,
    /// Flower assigned to today
    pub flower: Flower,
    pub anniversary: Anniversary,
    pub is_milestone: bool,
    /// First milestone still ahead, if any
    pub next_milestone: Option<u64>,
    pub season: Season,
    pub day_period: DayPeriod,
}

/// Temporal Engine - stateless apart from its immutable configuration
#[derive(Clone, Debug, Default)]
pub struct TemporalEngine {
    config: EngineConfig,
}

impl TemporalEngine {
    /// Create an engine with the default epoch, catalog and milestones
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        TemporalEngine { config }
    }

    #[inline]
    pub fn epoch(&self) -> Epoch {
        self.config.epoch
    }

    #[inline]
    pub fn catalog(&self) -> &FlowerCatalog {
        &self.config.catalog
    }

    #[inline]
    pub fn milestones(&self) -> &MilestoneSet {
        &self.config.milestones
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whole days from the epoch to `now`
    #[inline]
    pub fn elapsed_days(&self, now: NaiveDateTime) -> u64 {
        days_between_dates(self.config.epoch.date(), now.date())
    }

    /// Catalog entry for a day index; wraps indefinitely
    #[inline]
    pub fn flower_for_day(&self, day_index: u64) -> &Flower {
        self.config.catalog.for_day(day_index)
    }

    #[inline]
    pub fn is_milestone(&self, elapsed_days: u64) -> bool {
        self.config.milestones.contains(elapsed_days)
    }

    /// Next anniversary on or after `now`'s calendar date.
    ///
    /// The comparison is date-only: on the anniversary itself the target is
    /// today with `days_until == 0`. The first candidate year is
    /// `epoch.year + 1`, so the epoch day is never its own anniversary.
    pub fn next_anniversary(&self, now: NaiveDateTime) -> Anniversary {
        let epoch = self.config.epoch;
        let today = now.date();

        let mut year = today.year().max(epoch.year() + 1);
        let mut date = epoch.anniversary_in(year);
        if today > date {
            year += 1;
            date = epoch.anniversary_in(year);
        }

        Anniversary {
            date,
            years_since_epoch: (year - epoch.year()) as u32,
            days_until: days_between_dates(today, date),
        }
    }

    /// Compute the full observation for one render cycle
    pub fn observe(&self, now: NaiveDateTime) -> Observation {
        let elapsed_days = self.elapsed_days(now);
        Observation {
            at: now,
            elapsed_days,
            flower: self.flower_for_day(elapsed_days).clone(),
            anniversary: self.next_anniversary(now),
            is_milestone: self.is_milestone(elapsed_days),
            next_milestone: self.config.milestones.next_after(elapsed_days),
            season: season_for(now),
            day_period: day_period_for(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_between_same_instant() {
        let e = at(2021, 9, 23, 14, 5, 0);
        assert_eq!(days_between(e, e), 0);
    }

    #[test]
    fn test_days_between_never_negative() {
        let e = at(2021, 9, 23, 0, 0, 0);
        assert_eq!(days_between(e, at(2021, 9, 22, 23, 59, 59)), 0);
        assert_eq!(days_between(e, at(1999, 1, 1, 0, 0, 0)), 0);
    }

    #[test]
    fn test_days_between_ignores_time_of_day() {
        // Late evening to early morning is still one calendar day
        assert_eq!(
            days_between(at(2021, 9, 23, 23, 59, 59), at(2021, 9, 24, 0, 0, 1)),
            1
        );
        // Early morning to late evening the next day is also one
        assert_eq!(
            days_between(at(2021, 9, 23, 0, 0, 0), at(2021, 9, 24, 23, 59, 59)),
            1
        );
    }

    #[test]
    fn test_elapsed_days_from_default_epoch() {
        let engine = TemporalEngine::new();
        assert_eq!(engine.elapsed_days(at(2021, 9, 23, 18, 0, 0)), 0);
        assert_eq!(engine.elapsed_days(at(2021, 9, 24, 0, 0, 0)), 1);
        assert_eq!(engine.elapsed_days(at(2022, 9, 23, 0, 0, 0)), 365);
        assert_eq!(engine.elapsed_days(at(2020, 1, 1, 0, 0, 0)), 0);
    }

    #[test]
    fn test_flower_for_day_zero_is_first() {
        let engine = TemporalEngine::new();
        assert_eq!(engine.flower_for_day(0), engine.catalog().first());
    }

    #[test]
    fn test_anniversary_day_before() {
        let engine = TemporalEngine::new();
        let a = engine.next_anniversary(at(2022, 9, 22, 21, 0, 0));
        assert_eq!(a.date, date(2022, 9, 23));
        assert_eq!(a.days_until, 1);
        assert_eq!(a.years_since_epoch, 1);
        assert_eq!(a.calendar_year(), 2022);
    }

    #[test]
    fn test_anniversary_on_the_day_is_today() {
        let engine = TemporalEngine::new();
        for (h, m, s) in [(0, 0, 0), (0, 0, 1), (23, 59, 59)] {
            let a = engine.next_anniversary(at(2022, 9, 23, h, m, s));
            assert_eq!(a.date, date(2022, 9, 23));
            assert_eq!(a.days_until, 0);
            assert!(a.is_today());
        }
    }

    #[test]
    fn test_anniversary_day_after_rolls_to_next_year() {
        let engine = TemporalEngine::new();
        let a = engine.next_anniversary(at(2022, 9, 24, 0, 0, 0));
        assert_eq!(a.date, date(2023, 9, 23));
        assert_eq!(a.years_since_epoch, 2);
        assert_eq!(a.days_until, 364);
    }

    #[test]
    fn test_anniversary_on_epoch_day_is_first_anniversary() {
        let engine = TemporalEngine::new();
        let a = engine.next_anniversary(at(2021, 9, 23, 10, 0, 0));
        assert_eq!(a.date, date(2022, 9, 23));
        assert_eq!(a.years_since_epoch, 1);
        assert_eq!(a.days_until, 365);
    }

    #[test]
    fn test_anniversary_before_epoch() {
        let engine = TemporalEngine::new();
        let a = engine.next_anniversary(at(2020, 12, 31, 0, 0, 0));
        assert_eq!(a.date, date(2022, 9, 23));
        assert_eq!(a.years_since_epoch, 1);
    }

    #[test]
    fn test_leap_day_epoch_anniversary() {
        let engine = TemporalEngine::with_config(EngineConfig::with_epoch(
            Epoch::new(2020, 2, 29).unwrap(),
        ));
        let a = engine.next_anniversary(at(2021, 2, 28, 12, 0, 0));
        assert_eq!(a.date, date(2021, 3, 1));
        assert_eq!(a.days_until, 1);
    }

    #[test]
    fn test_milestones() {
        let engine = TemporalEngine::new();
        assert!(engine.is_milestone(100));
        assert!(!engine.is_milestone(101));
    }

    #[test]
    fn test_observe_milestone_day() {
        let engine = TemporalEngine::new();
        // 2021-09-23 + 100 days
        let obs = engine.observe(at(2022, 1, 1, 9, 30, 0));
        assert_eq!(obs.elapsed_days, 100);
        assert!(obs.is_milestone);
        assert_eq!(obs.next_milestone, Some(365));
        assert_eq!(obs.season, Season::Winter);
        assert_eq!(obs.day_period, DayPeriod::Morning);
        assert_eq!(&obs.flower, engine.flower_for_day(100));
    }

    #[test]
    fn test_observe_after_last_milestone() {
        let engine = TemporalEngine::new();
        let obs = engine.observe(at(2030, 1, 1, 0, 0, 0));
        assert!(obs.elapsed_days > 1825);
        assert_eq!(obs.next_milestone, None);
    }

    #[test]
    fn test_season_for() {
        assert_eq!(season_for(at(2022, 4, 1, 0, 0, 0)), Season::Spring);
        assert_eq!(season_for(at(2022, 9, 23, 0, 0, 0)), Season::Fall);
    }

    proptest! {
        #[test]
        fn prop_days_between_clamps(a in 0i64..200_000, b in 0i64..200_000, ha in 0u32..24, hb in 0u32..24) {
            let base = at(1970, 1, 1, 0, 0, 0);
            let from = base + chrono::Duration::days(a) + chrono::Duration::hours(ha as i64);
            let to = base + chrono::Duration::days(b) + chrono::Duration::hours(hb as i64);
            let d = days_between(from, to);
            if b <= a {
                prop_assert_eq!(d, 0);
            } else {
                prop_assert_eq!(d, (b - a) as u64);
            }
        }

        #[test]
        fn prop_anniversary_never_in_past(days in 0i64..40_000, secs in 0u32..86_400) {
            let engine = TemporalEngine::new();
            let now = at(2021, 9, 23, 0, 0, 0)
                + chrono::Duration::days(days)
                + chrono::Duration::seconds(secs as i64);
            let a = engine.next_anniversary(now);
            prop_assert!(a.date >= now.date());
            prop_assert!(a.years_since_epoch >= 1);
            prop_assert!(a.days_until <= 366);
        }

        #[test]
        fn prop_observe_is_idempotent(days in 0i64..20_000, secs in 0u32..86_400) {
            let engine = TemporalEngine::new();
            let now = at(2021, 1, 1, 0, 0, 0)
                + chrono::Duration::days(days)
                + chrono::Duration::seconds(secs as i64);
            prop_assert_eq!(engine.observe(now), engine.observe(now));
        }
    }
}
