//! The fixed reference date every day count is measured from

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};

use crate::{BouquetError, BouquetResult};

/// Epoch - an immutable calendar date with no time-of-day component
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(NaiveDate);

impl Epoch {
    /// Year, month and day of the default epoch: September 23, 2021
    pub const DEFAULT_YMD: (i32, u32, u32) = (2021, 9, 23);

    /// Build an epoch from a calendar date. Month is 1-12.
    pub fn new(year: i32, month: u32, day: u32) -> BouquetResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Epoch)
            .ok_or(BouquetError::InvalidEpoch { year, month, day })
    }

    #[inline]
    pub fn from_date(date: NaiveDate) -> Self {
        Epoch(date)
    }

    #[inline]
    pub fn date(self) -> NaiveDate {
        self.0
    }

    #[inline]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[inline]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    #[inline]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// The epoch's month/day placed in `year`.
    ///
    /// A February 29 epoch lands on March 1 in common years.
    pub fn anniversary_in(self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month(), self.day()).unwrap_or_else(|| {
            // Only Feb 29 can be missing from a year.
            NaiveDate::from_ymd_opt(year, 2, 28)
                .and_then(|d| d.checked_add_days(Days::new(1)))
                .unwrap_or(NaiveDate::MAX)
        })
    }
}

impl Default for Epoch {
    fn default() -> Self {
        let (year, month, day) = Self::DEFAULT_YMD;
        Epoch(NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN))
    }
}

impl From<NaiveDate> for Epoch {
    fn from(date: NaiveDate) -> Self {
        Epoch(date)
    }
}

impl fmt::Debug for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Epoch({})", self.0)
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
