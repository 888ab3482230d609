//! Render frames - engine output plus the text and layout derived from it

use serde::Serialize;

use bouquet_time::{Anniversary, Observation};

use crate::layout::{BouquetLayout, MAX_VISIBLE_FLOWERS};

/// Everything a presenter needs to draw one render
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub observation: Observation,
    /// One flower per elapsed day
    pub flowers_count: u64,
    pub bouquet: BouquetLayout,
    /// Label on the bouquet tag, e.g. "12 days"
    pub tag: String,
    /// Caption under the bouquet
    pub note: String,
    /// e.g. "2 Years - September 23, 2023"
    pub anniversary_label: String,
    /// Milestone celebration requested
    pub celebrate: bool,
}

impl Frame {
    pub fn build(observation: Observation) -> Self {
        let days = observation.elapsed_days;
        Frame {
            flowers_count: days,
            bouquet: BouquetLayout::for_days(days),
            tag: tag_label(days),
            note: note_text(days),
            anniversary_label: anniversary_label(&observation.anniversary),
            celebrate: observation.is_milestone,
            observation,
        }
    }

    #[inline]
    pub fn elapsed_days(&self) -> u64 {
        self.observation.elapsed_days
    }
}

pub fn tag_label(days: u64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

pub fn note_text(days: u64) -> String {
    match days {
        0 => "Today is our beginning ✨".to_string(),
        1 => "One day, one flower 💕".to_string(),
        d if d > MAX_VISIBLE_FLOWERS as u64 => format!(
            "{} flowers shown of {} days",
            MAX_VISIBLE_FLOWERS,
            group_thousands(d)
        ),
        _ => "Each flower represents our love 🌸".to_string(),
    }
}

pub fn anniversary_label(anniversary: &Anniversary) -> String {
    let years = anniversary.years_since_epoch;
    format!(
        "{} Year{} - {}",
        years,
        if years == 1 { "" } else { "s" },
        anniversary.date.format("%B %-d, %Y")
    )
}

/// `1234567` -> `"1,234,567"`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
