//! Calendar classifications consumed by the presentation layer
//!
//! - Season: four bands by calendar month
//! - DayPeriod: five bands by hour of day

use std::fmt;

use serde::{Deserialize, Serialize};

/// Meteorological season (northern hemisphere)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// March through May
    Spring,
    /// June through August
    Summer,
    /// September through November
    Fall,
    /// December, January, February
    Winter,
}

impl Season {
    /// Classify a calendar month (1-12). Anything outside 3..=11 is winter.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-of-day band used for background selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    /// 05:00-08:00
    Dawn,
    /// 08:00-12:00
    Morning,
    /// 12:00-17:00
    Afternoon,
    /// 17:00-20:00
    Evening,
    /// 20:00-05:00
    Night,
}

impl DayPeriod {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=7 => DayPeriod::Dawn,
            8..=11 => DayPeriod::Morning,
            12..=16 => DayPeriod::Afternoon,
            17..=19 => DayPeriod::Evening,
            _ => DayPeriod::Night,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayPeriod::Dawn => "dawn",
            DayPeriod::Morning => "morning",
            DayPeriod::Afternoon => "afternoon",
            DayPeriod::Evening => "evening",
            DayPeriod::Night => "night",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
